use joystick_diagrams_core::prelude::*;

fn command_of<'a>(p: &'a Profile, guid: &str, input: &str) -> Option<&'a str> {
    p.get_device(guid)
        .and_then(|d| d.get_input(input))
        .map(|i| i.command.as_str())
}

fn modifier_of<'a>(p: &'a Profile, guid: &str, input: &str, mods: &[&str]) -> Option<&'a str> {
    p.get_device(guid)
        .and_then(|d| d.get_input(input))
        .and_then(|i| i.get_modifier(&qualifiers(mods.iter().copied())))
        .map(|m| m.command.as_str())
}

fn conflicting_pair() -> (Profile, Profile) {
    let mut a = Profile::new("A");
    a.add_device("G", "Stick", &NoopLog)
        .create_input("I", Control::button(1), "Fire", &NoopLog)
        .add_modifier(qualifiers(["ctrl"]), "from A");

    let mut b = Profile::new("B");
    b.add_device("G", "Stick", &NoopLog)
        .create_input("I", Control::button(1), "Fire", &NoopLog)
        .add_modifier(qualifiers(["ctrl"]), "from B");

    (a, b)
}

#[test]
fn merge_with_self_is_identity() {
    let (a, _) = conflicting_pair();
    assert_eq!(a.merge_profiles(&a), a);
    assert_eq!(a.merge_profiles(&a.clone()), a);
}

#[test]
fn right_side_wins_conflicts() {
    let (a, b) = conflicting_pair();

    let ab = a.merge_profiles(&b);
    let ba = b.merge_profiles(&a);

    assert_eq!(modifier_of(&ab, "g", "I", &["ctrl"]), Some("from B"));
    assert_eq!(modifier_of(&ba, "g", "I", &["ctrl"]), Some("from A"));
    assert_ne!(ab.devices, ba.devices);
}

#[test]
fn disjoint_devices_are_unioned() {
    let mut a = Profile::new("A");
    a.add_device("G1", "Stick", &NoopLog)
        .create_input("b1", Control::button(1), "Fire", &NoopLog);
    let mut b = Profile::new("B");
    b.add_device("G2", "Throttle", &NoopLog)
        .create_input("x", Control::axis(AxisDirection::X), "Thrust", &NoopLog);

    let merged = a.merge_profiles(&b);

    assert_eq!(merged.devices.len(), 2);
    assert_eq!(merged.get_device("g1"), a.get_device("g1"));
    assert_eq!(merged.get_device("g2"), b.get_device("g2"));
}

#[test]
fn left_only_inputs_and_modifiers_survive() {
    let mut a = Profile::new("A");
    let dev = a.add_device("G", "Stick", &NoopLog);
    dev.create_input("b1", Control::button(1), "Fire", &NoopLog);
    dev.create_input("b2", Control::button(2), "Boost", &NoopLog);
    dev.add_modifier_to_input("b1", qualifiers(["alt"]), "Alt Fire", &NoopLog);

    let mut b = Profile::new("B");
    let dev = b.add_device("G", "Stick", &NoopLog);
    dev.create_input("b1", Control::button(1), "Fire", &NoopLog);
    dev.add_modifier_to_input("b1", qualifiers(["shift"]), "Shift Fire", &NoopLog);
    dev.create_input("b3", Control::button(3), "Gear", &NoopLog);

    let merged = a.merge_profiles(&b);
    let device = merged.get_device("g").expect("device");

    let ids: Vec<&str> = device.inputs.keys().map(String::as_str).collect();
    assert_eq!(ids, ["b1", "b2", "b3"]);
    assert_eq!(modifier_of(&merged, "g", "b1", &["alt"]), Some("Alt Fire"));
    assert_eq!(modifier_of(&merged, "g", "b1", &["shift"]), Some("Shift Fire"));
    assert_eq!(device.get_input("b1").map(|i| i.modifiers.len()), Some(2));
}

#[test]
fn modifier_insert_is_idempotent() {
    let mut input = Input::new(Control::button(4), "Fire");
    input.add_modifier(qualifiers(["alt"]), "x");
    input.add_modifier(qualifiers(["alt"]), "y");

    assert_eq!(input.modifiers.len(), 1);
    assert_eq!(input.modifiers[0].modifiers, qualifiers(["alt"]));
    assert_eq!(input.modifiers[0].command, "y");
}

#[test]
fn guid_lookup_is_case_insensitive() {
    let mut p = Profile::new("App");
    p.add_device("ABC-123", "Stick", &NoopLog)
        .create_input("b1", Control::button(1), "Fire", &NoopLog);

    let found = p.get_device("abc-123").expect("device");
    assert_eq!(found.guid, "abc-123");
    assert_eq!(command_of(&p, "ABC-123", "b1"), Some("Fire"));
}

#[test]
fn end_to_end_two_apps() {
    let mut app1 = Profile::new("App1");
    let dev = app1.add_device("{GUID1}", "Stick", &NoopLog);
    dev.create_input("k1", Control::button(1), "Fire", &NoopLog);
    dev.add_modifier_to_input("k1", qualifiers(["ctrl"]), "Fire Alt", &NoopLog);

    let mut app2 = Profile::new("App2");
    app2.add_device("{GUID1}", "Stick", &NoopLog)
        .create_input("k1", Control::button(1), "Hold", &NoopLog);

    let merged = app1.merge_profiles(&app2);

    assert_eq!(merged.devices.len(), 1);
    assert_eq!(command_of(&merged, "{GUID1}", "k1"), Some("Hold"));
    assert_eq!(
        modifier_of(&merged, "{guid1}", "k1", &["ctrl"]),
        Some("Fire Alt")
    );
}

#[test]
fn collections_merge_by_profile_name() {
    let mut left = ProfileCollection::new();
    left.create_profile("Ship", &NoopLog)
        .add_device("g", "Stick", &NoopLog)
        .create_input("b1", Control::button(1), "Fire", &NoopLog);
    left.create_profile("Foot", &NoopLog);

    let mut right = ProfileCollection::new();
    right
        .create_profile("Ship", &NoopLog)
        .add_device("g", "Stick", &NoopLog)
        .create_input("b1", Control::button(1), "Missiles", &NoopLog);

    let merged = left.merge(&right);

    assert_eq!(merged.len(), 2);
    let ship = merged.get_profile("Ship").expect("ship");
    assert_eq!(command_of(ship, "g", "b1"), Some("Missiles"));
    assert_eq!(
        command_of(left.get_profile("Ship").expect("ship"), "g", "b1"),
        Some("Fire")
    );
}

#[test]
fn collection_serializes_to_json() {
    let mut pc = ProfileCollection::new();
    let dev = pc
        .create_profile("Ship", &NoopLog)
        .add_device("G", "Stick", &NoopLog);
    dev.create_input("HAT_1_U", Control::hat(1, HatDirection::Up), "Look Up", &NoopLog);

    let json = serde_json::to_value(&pc).expect("serialize");
    let input = &json["profiles"]["Ship"]["devices"]["g"]["inputs"]["HAT_1_U"];
    assert_eq!(input["command"], "Look Up");
    assert_eq!(input["identifier"]["type"], "hat");
    assert_eq!(input["identifier"]["direction"], "U");

    let back: ProfileCollection = serde_json::from_value(json).expect("deserialize");
    assert_eq!(back, pc);
}
