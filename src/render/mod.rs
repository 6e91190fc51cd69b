pub(crate) mod context;
pub(crate) mod dispatch;
pub(crate) mod output;
