pub mod dip;
pub mod mcp;
pub mod utilities;
