pub mod destination;
pub mod feed;
pub mod http_handlers;
pub mod payload;
pub mod pipeline;
pub mod remote;
pub mod resolver;
pub mod round_date;
pub mod round_label;
pub mod selection;
pub mod source;
