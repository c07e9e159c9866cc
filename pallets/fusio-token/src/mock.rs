use crate as pallet_fusio_token;
use frame_support::{
    derive_impl, parameter_types,
    traits::{ConstU32, ConstU64},
};
use sp_core::H256;
use sp_runtime::{
    traits::{BlakeTwo256, IdentityLookup},
    BuildStorage,
};

type Block = frame_system::mocking::MockBlock<Test>;

// Configure a mock runtime to test the pallet.
frame_support::construct_runtime!(
    pub enum Test {
        System: frame_system,
        FusioToken: pallet_fusio_token,
    }
);

#[derive_impl(frame_system::config_preludes::TestDefaultConfig)]
impl frame_system::Config for Test {
    type BaseCallFilter = frame_support::traits::Everything;
    type BlockWeights = ();
    type BlockLength = ();
    type DbWeight = ();
    type RuntimeOrigin = RuntimeOrigin;
    type RuntimeCall = RuntimeCall;
    type Nonce = u64;
    type Hash = H256;
    type Hashing = BlakeTwo256;
    type AccountId = u64;
    type Lookup = IdentityLookup<Self::AccountId>;
    type Block = Block;
    type RuntimeEvent = RuntimeEvent;
    type BlockHashCount = ConstU64<250>;
    type Version = ();
    type PalletInfo = PalletInfo;
    type AccountData = ();
    type OnNewAccount = ();
    type OnKilledAccount = ();
    type SystemWeightInfo = ();
    type SS58Prefix = ();
    type OnSetCode = ();
    type MaxConsumers = ConstU32<16>;
}

/// 1e9 units, matching the deployed cap.
pub const MAX_SUPPLY: u128 = 1_000_000_000;

parameter_types! {
    pub const TokenMaxSupply: u128 = MAX_SUPPLY;
}

impl pallet_fusio_token::Config for Test {
    type RuntimeEvent = RuntimeEvent;
    type MaxSupply = TokenMaxSupply;
}

/// The null identity under u64 accounts.
pub const NULL: u64 = 0;
pub const OWNER: u64 = 1;
pub const MINTER: u64 = 2;
pub const USER: u64 = 3;
pub const NEW_MINTER: u64 = 4;

/// Runs `initialize` with the standard fixture identities.
pub fn initialize_token() {
    frame_support::assert_ok!(FusioToken::initialize(
        RuntimeOrigin::signed(OWNER),
        b"Fusio".to_vec().try_into().unwrap(),
        b"FIO".to_vec().try_into().unwrap(),
        MINTER,
        OWNER,
    ));
}

// Build genesis storage according to the mock runtime.
pub fn new_test_ext() -> sp_io::TestExternalities {
    let t = frame_system::GenesisConfig::<Test>::default().build_storage().unwrap();
    let mut ext: sp_io::TestExternalities = t.into();
    ext.execute_with(|| System::set_block_number(1));
    ext
}
