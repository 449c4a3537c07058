pub(crate) mod clock;
pub(crate) mod controller;
pub(crate) mod observer;
pub(crate) mod plan;
pub(crate) mod settings;
pub(crate) mod window;
