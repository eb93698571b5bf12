use solana_sdk::{pubkey, pubkey::Pubkey};

// PROGRAMS
pub const MAINNET_SWAP_PROGRAM_ID: Pubkey = pubkey!("22Y43yTVxuUkoRKdm9thyRhQ3SdgQS7c7kB6UNCiaczD");
pub const MAINNET_DEX_PROGRAM_ID: Pubkey = pubkey!("9xQeWvG816bUx9EPjHmaT23yvVM2ZWbrrpZb9PusVFin");

pub const DEVNET_SWAP_PROGRAM_ID: Pubkey = pubkey!("22Y43yTVxuUkoRKdm9thyRhQ3SdgQS7c7kB6UNCiaczD");
pub const DEVNET_DEX_PROGRAM_ID: Pubkey = pubkey!("DESVgJVGajEgKGXhb6XmqDHGz3VjdgP7rEVESBgxmroY");

// VAULT AUTHORITY
// nonces tried when searching for the market vault authority, inclusive
pub const VAULT_AUTHORITY_MAX_NONCE: u64 = 254;

// ACCOUNT LAYOUTS
pub const MARKET_ACCOUNT_LEN: usize = 388;
pub const OPEN_ORDERS_ACCOUNT_LEN: usize = 3228;
pub const OPEN_ORDERS_MARKET_OFFSET: usize = 13;
pub const OPEN_ORDERS_OWNER_OFFSET: usize = 45;

pub const ACCOUNT_HEAD_PADDING: &[u8; 5] = b"serum";
pub const ACCOUNT_TAIL_PADDING: &[u8; 7] = b"padding";

pub const ACCOUNT_FLAG_INITIALIZED: u64 = 1 << 0;
pub const ACCOUNT_FLAG_MARKET: u64 = 1 << 1;

// SWAP PROGRAM ABI
// sha256("global:swap")[..8]
pub const SWAP_DISCRIMINATOR: [u8; 8] = [248, 198, 158, 145, 225, 117, 135, 200];
// sha256("event:DidSwap")[..8]
pub const DID_SWAP_DISCRIMINATOR: [u8; 8] = [225, 151, 200, 172, 242, 216, 225, 30];

pub const PROGRAM_LOG_PREFIX: &str = "Program log: ";
// first 10 base64 characters only depend on the discriminator bytes
pub const DID_SWAP_LOG_PREFIX: &str = "Program log: 4ZfIrPLY4R";

// SLIPPAGE
// default floor is 99.5% of the simulated output
pub const DEFAULT_SLIPPAGE_NUMERATOR: i64 = 995;
pub const DEFAULT_SLIPPAGE_SCALE: u32 = 3;

// smallest floor the swap program accepts, used while estimating
pub const ESTIMATE_MIN_AMOUNT_OUT: u64 = 1;
