mod owner_op;
mod read_op;
pub mod record;
mod write_op;

pub use record::Record;
