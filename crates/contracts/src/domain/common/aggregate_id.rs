/// Идентификатор агрегата, обратимо преобразуемый в строку.
///
/// Каждый id агрегата — newtype вокруг `Uuid`; строковая форма ходит в
/// URL и ключах вкладок.
pub trait AggregateId: Sized {
    fn as_string(&self) -> String;
    fn from_string(s: &str) -> Result<Self, String>;
}
