pub mod bucket;
pub mod category_share;
pub mod comparison;
pub mod period;
pub mod range;
pub mod record;
