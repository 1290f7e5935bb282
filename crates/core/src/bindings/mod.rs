// Raw bind token handling shared by plugins.
pub mod resolve_bind;
