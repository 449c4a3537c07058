use crate::foundation::core::EntryList;
use crate::foundation::error::SpinResult;
use crate::spin::settings::SpinSettings;

/// Synchronous snapshot view of the store that owns entrants and settings.
///
/// The controller reads a source between spins only; whatever the store does afterwards
/// never reaches a running spin.
pub trait EntrySource {
    fn entries(&self) -> SpinResult<EntryList>;
    fn settings(&self) -> SpinResult<SpinSettings>;
}

/// Source backed by plain values.
#[derive(Clone, Debug, Default)]
pub struct InMemorySource {
    entries: EntryList,
    settings: SpinSettings,
}

impl InMemorySource {
    pub fn new(entries: EntryList, settings: SpinSettings) -> Self {
        Self { entries, settings }
    }

    pub fn set_entries(&mut self, entries: EntryList) {
        self.entries = entries;
    }

    pub fn set_settings(&mut self, settings: SpinSettings) {
        self.settings = settings;
    }
}

impl EntrySource for InMemorySource {
    fn entries(&self) -> SpinResult<EntryList> {
        Ok(self.entries.clone())
    }

    fn settings(&self) -> SpinResult<SpinSettings> {
        Ok(self.settings.clone())
    }
}
