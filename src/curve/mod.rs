pub(crate) mod bezier;
pub(crate) mod editor;
pub(crate) mod presets;
