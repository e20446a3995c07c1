mod inventory_url;
mod xname;

pub use inventory_url::{InventoryUrl, InventoryUrlConfig};
pub use xname::{XnameTranslation, node_xname_to_bmc_xname, translate};
