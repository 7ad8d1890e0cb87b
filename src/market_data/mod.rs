pub mod bars;
pub mod book_events;
pub mod enums;

use enums::MarketDataSchema;

/// Common surface of every stored market data record: the schema it is
/// written under and the table/stream keys it maps to. Naming only; the
/// storage layer itself lives elsewhere.
pub trait MarketDataRecord {
    fn schema(&self) -> MarketDataSchema;

    /// Relational table the record belongs in.
    fn table_name(&self) -> String;

    /// Realtime stream key for the record's instrument.
    fn stream_name(&self) -> String;
}
