pub mod icon_pack;
pub mod source;
pub mod store;
