use boytacean_common::error::Error;

/// Identifies the binary layout used to (de)serialize a component's
/// state, allowing future formats to be added without breaking the
/// [`StateComponent`] contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateFormat {
    /// Compact ad-hoc layout native to this emulator, used by default
    /// when no format is explicitly requested.
    Boytacean,
}

impl Default for StateFormat {
    fn default() -> Self {
        Self::Boytacean
    }
}

/// Trait implemented by every subsystem that takes part in save state
/// serialization, allowing the whole machine to be snapshotted and
/// restored one component at a time.
pub trait StateComponent {
    /// Serializes the current state of the component into a flat byte
    /// buffer, using the requested `format` (or the default format in
    /// case none is provided).
    fn state(&self, format: Option<StateFormat>) -> Result<Vec<u8>, Error>;

    /// Restores the component's state from a previously serialized
    /// byte buffer, using the requested `format` (or the default
    /// format in case none is provided).
    fn set_state(&mut self, data: &[u8], format: Option<StateFormat>) -> Result<(), Error>;
}
