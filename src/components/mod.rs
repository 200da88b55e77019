pub mod charts;
pub mod layout;
pub mod ledger;
pub mod notification;
pub mod pagination;
pub mod status;
