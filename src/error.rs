#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SevSegError<E> {
    Pin(E),
    InvalidSymbol(u8),
    InvalidLocation(u8),
}

impl<E> From<E> for SevSegError<E> {
    fn from(error: E) -> Self {
        SevSegError::Pin(error)
    }
}
