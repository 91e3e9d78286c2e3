mod page_data;
mod row_table;
mod seat_type;

pub use page_data::{CarriageSeats, PageSeatData, RowDiagrams, RowSeats};
pub use row_table::RowTable;
pub use seat_type::SeatType;
