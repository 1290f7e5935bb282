use std::{collections::HashMap, fs, sync::{Arc, Mutex}};

use joystick_diagrams_core::prelude::*;
use joystick_diagrams_plugins::{
    StarCitizen,
    elite_dangerous::parser as ed_parser,
    star_citizen::parser::{self, ActionMapsFile, DeviceInfo},
};

const ACTIONMAPS: &str = r#"<ActionMaps>
 <ActionProfiles version="1" optionsVersion="2" rebindVersion="2" profileName="default">
  <options type="keyboard" instance="1" Product="Keyboard  {6F1D2B61-D5A0-11CF-BFC7-444553540000}"/>
  <options type="joystick" instance="1" Product=" VKB-Sim Gladiator NXT R    {0200231D-0000-0000-0000-504944564944}"/>
  <options type="joystick" instance="2" Product=" T.16000M    {B10A044F-0000-0000-0000-504944564944}"/>
  <actionmap name="spaceship_movement">
   <action name="v_strafe_up">
    <rebind input="js1_button3"/>
   </action>
   <action name="v_strafe_down">
    <rebind input="js1_lalt+button3"/>
   </action>
   <action name="v_pitch">
    <rebind input="js1_y"/>
   </action>
   <action name="v_throttle">
    <rebind input="js2_slider1"/>
   </action>
   <action name="v_unbound">
    <rebind input="js1_ "/>
   </action>
   <action name="v_keyboard">
    <rebind input="kb1_f"/>
   </action>
  </actionmap>
  <actionmap name="spaceship_view">
   <action name="v_view_look_up">
    <rebind input="js1_hat1_up"/>
   </action>
   <action name="v_view_rotz">
    <rebind input="js2_rotz"/>
   </action>
  </actionmap>
 </ActionProfiles>
</ActionMaps>
"#;

#[test]
fn parses_devices_inputs_and_modifiers() {
    let prefixes = vec!["js".to_string()];
    let pc = parser::parse(ACTIONMAPS, &prefixes, &NoopLog).unwrap();
    let profile = pc.get_profile("default").unwrap();

    assert_eq!(profile.devices.len(), 2);
    let stick = profile
        .get_device("0200231D-0000-0000-0000-504944564944")
        .unwrap();
    assert_eq!(stick.name, "VKB-Sim Gladiator NXT R");

    let b3 = stick.get_input("BUTTON_3").unwrap();
    assert_eq!(b3.command, "Strafe up");
    assert_eq!(
        b3.get_modifier(&qualifiers(["lalt"]))
            .map(|m| m.command.as_str()),
        Some("Strafe down")
    );
    assert!(stick.get_input("HAT_1_U").is_some());
    assert!(stick.get_input("AXIS_Y").is_some());

    let t16 = profile
        .get_device("b10a044f-0000-0000-0000-504944564944")
        .unwrap();
    assert!(t16.get_input("AXIS_SLIDER_1").is_some());
    assert!(t16.get_input("AXIS_RZ").is_some());
}

#[test]
fn keyboard_prefix_is_opt_in() {
    let prefixes = vec!["js".to_string(), "kb".to_string()];
    let pc = parser::parse(ACTIONMAPS, &prefixes, &NoopLog).unwrap();
    // `f` is not a joystick control, so nothing resolves for the keyboard.
    let profile = pc.get_profile("default").unwrap();
    assert!(profile
        .get_device("6f1d2b61-d5a0-11cf-bfc7-444553540000")
        .is_none());
}

#[test]
fn rejects_non_actionmaps_xml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("actionmaps.xml");
    fs::write(&path, "<Root><Primary/><Secondary/></Root>").unwrap();
    assert!(matches!(
        ActionMapsFile::load(&path),
        Err(PluginError::InvalidFormat { .. })
    ));
}

#[test]
fn merged_sources_prefer_the_later_one() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("actionmaps.xml");
    fs::write(&path, ACTIONMAPS).unwrap();

    let settings = Settings {
        data_dir: Some(dir.path().to_path_buf()),
        ..Default::default()
    };
    let mut sc = StarCitizen::new(Arc::new(settings), Arc::new(NoopLog));
    assert!(sc.set_path(&path));
    let sc_flat = sc.process().unwrap().flatten("All");

    // The same stick, as Elite Dangerous would see it.
    let ed_binds = r#"<Root>
        <UI_Select>
            <Primary Device="0200231D-0000-0000-0000-504944564944" Key="Joy_3" />
            <Secondary Device="{NoDevice}" Key="" />
        </UI_Select>
    </Root>"#;
    let ed_flat = ed_parser::parse(ed_binds, &NoopLog).unwrap().flatten("All");

    let merged = sc_flat.merge_profiles(&ed_flat);
    let b3 = merged
        .get_device("0200231d-0000-0000-0000-504944564944")
        .and_then(|d| d.get_input("BUTTON_3"))
        .unwrap();
    assert_eq!(b3.command, "UI_Select");
    assert_eq!(
        b3.get_modifier(&qualifiers(["lalt"]))
            .map(|m| m.command.as_str()),
        Some("Strafe down")
    );
}

#[test]
fn modifier_only_source_keeps_earlier_base_command() {
    let prefixes = vec!["js".to_string()];
    let sc_flat = parser::parse(ACTIONMAPS, &prefixes, &NoopLog)
        .unwrap()
        .flatten("All");

    // Joy_3 is only bound together with a keyboard modifier.
    let ed_binds = r#"<Root>
        <UI_Select>
            <Primary Device="0200231D-0000-0000-0000-504944564944" Key="Joy_3">
                <Modifier Device="Keyboard" Key="Key_LeftShift" />
            </Primary>
            <Secondary Device="{NoDevice}" Key="" />
        </UI_Select>
    </Root>"#;
    let ed_flat = ed_parser::parse(ed_binds, &NoopLog).unwrap().flatten("All");

    let merged = sc_flat.merge_profiles(&ed_flat);
    let b3 = merged
        .get_device("0200231d-0000-0000-0000-504944564944")
        .and_then(|d| d.get_input("BUTTON_3"))
        .unwrap();
    assert_eq!(b3.command, "Strafe up");
    assert_eq!(
        b3.get_modifier(&qualifiers(["Key_LeftShift"]))
            .map(|m| m.command.as_str()),
        Some("UI_Select")
    );
    assert_eq!(b3.modifiers.len(), 2);
}

#[derive(Default)]
struct RecordingLog {
    warnings: Mutex<Vec<String>>,
}

impl CoreLog for RecordingLog {
    fn warn(&self, msg: &str) {
        self.warnings.lock().unwrap().push(msg.to_string());
    }
}

#[test]
fn unresolved_binding_is_warned() {
    let devices = HashMap::from([(
        "js1".to_string(),
        DeviceInfo {
            name: "Stick".into(),
            guid: "abc".into(),
        },
    )]);
    let log = RecordingLog::default();

    assert!(parser::resolve_input("js1_mouse1", &devices, &log).is_none());
    let warnings = log.warnings.lock().unwrap();
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].contains("js1_mouse1"));
}

#[test]
fn blank_and_unknown_device_binds_are_silent() {
    let devices = HashMap::new();
    let log = RecordingLog::default();

    assert!(parser::resolve_input("js1_ ", &devices, &log).is_none());
    assert!(parser::resolve_input("js9_button1", &devices, &log).is_none());
    assert!(log.warnings.lock().unwrap().is_empty());
}
