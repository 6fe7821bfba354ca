pub mod create_distributor;
pub mod set_status;
pub mod set_release_percent;
pub mod set_merkle_root;
pub mod claim;
pub mod withdraw;
pub mod close_claim_record;

pub use create_distributor::*;
pub use set_status::*;
pub use set_release_percent::*;
pub use set_merkle_root::*;
pub use claim::*;
pub use withdraw::*;
pub use close_claim_record::*;
