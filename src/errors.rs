pub const ERR_NOT_OWNER: &str = "Ownable: caller is not the owner";
pub const ERR_NOT_AUTHORIZED: &str = "Not authorized to register";
pub const ERR_NOT_AUTHORIZED_CALLER: &str = "Not authorized registry caller";
pub const ERR_PROPOSAL_NOT_FOUND: &str = "Proposal does not exist";
pub const ERR_PROPOSAL_INACTIVE: &str = "Proposal is not active";
pub const ERR_AMOUNT_MISMATCH: &str = "Amount does not match";
pub const ERR_VERIFICATION_FAILED: &str = "Verification failed";
pub const ERR_ALREADY_CLAIMED: &str = "Already received airdrop";
pub const ERR_INVALID_ADDRESS: &str = "Invalid address";
