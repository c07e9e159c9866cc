//! Benchmarking setup for pallet-fusio-token

use super::*;

#[allow(unused)]
use crate::Pallet as FusioToken;
use frame_benchmarking::v2::*;
use frame_system::RawOrigin;

#[benchmarks]
mod benchmarks {
    use super::*;

    /// Seeds an initialized ledger with the full cap held by the owner.
    fn setup_ledger<T: Config>() -> (T::AccountId, T::AccountId) {
        let owner: T::AccountId = account("owner", 0, 0);
        let minter: T::AccountId = account("minter", 0, 0);
        Owner::<T>::put(&owner);
        Minter::<T>::put(&minter);
        Balances::<T>::insert(&owner, T::MaxSupply::get());
        TotalSupply::<T>::put(T::MaxSupply::get());
        Initialized::<T>::put(true);
        (owner, minter)
    }

    #[benchmark]
    fn initialize() {
        let caller: T::AccountId = whitelisted_caller();
        let owner: T::AccountId = account("owner", 0, 0);
        let minter: T::AccountId = account("minter", 0, 0);
        let name: BoundedVec<u8, ConstU32<64>> = b"Fusio".to_vec().try_into().unwrap();
        let symbol: BoundedVec<u8, ConstU32<16>> = b"FIO".to_vec().try_into().unwrap();

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), name, symbol, minter, owner.clone());

        assert_eq!(Balances::<T>::get(&owner), T::MaxSupply::get());
        assert_eq!(Initialized::<T>::get(), true);
    }

    #[benchmark]
    fn mint() {
        let (owner, minter) = setup_ledger::<T>();
        // Open headroom under the cap
        Balances::<T>::insert(&owner, 0);
        TotalSupply::<T>::put(0u128);
        let recipient: T::AccountId = account("recipient", 0, 0);
        let amount: u128 = 1_000_000;

        #[extrinsic_call]
        _(RawOrigin::Signed(minter), recipient.clone(), amount);

        assert_eq!(Balances::<T>::get(&recipient), amount);
    }

    #[benchmark]
    fn burn() {
        let (owner, _) = setup_ledger::<T>();
        let amount: u128 = 1_000_000;

        #[extrinsic_call]
        _(RawOrigin::Signed(owner.clone()), amount);

        assert_eq!(Balances::<T>::get(&owner), T::MaxSupply::get() - amount);
    }

    #[benchmark]
    fn transfer() {
        let (owner, _) = setup_ledger::<T>();
        let recipient: T::AccountId = account("recipient", 0, 0);
        let amount: u128 = 1_000_000;

        #[extrinsic_call]
        _(RawOrigin::Signed(owner), recipient.clone(), amount);

        assert_eq!(Balances::<T>::get(&recipient), amount);
    }

    #[benchmark]
    fn approve() {
        let (owner, _) = setup_ledger::<T>();
        let spender: T::AccountId = account("spender", 0, 0);
        let amount: u128 = 1_000_000;

        #[extrinsic_call]
        _(RawOrigin::Signed(owner.clone()), spender.clone(), amount);

        assert_eq!(Allowances::<T>::get(&owner, &spender), amount);
    }

    #[benchmark]
    fn transfer_from() {
        let (owner, _) = setup_ledger::<T>();
        let spender: T::AccountId = account("spender", 0, 0);
        let recipient: T::AccountId = account("recipient", 0, 0);
        let amount: u128 = 1_000_000;
        Allowances::<T>::insert(&owner, &spender, amount);

        #[extrinsic_call]
        _(RawOrigin::Signed(spender.clone()), owner.clone(), recipient.clone(), amount);

        assert_eq!(Balances::<T>::get(&recipient), amount);
        assert_eq!(Allowances::<T>::get(&owner, &spender), 0);
    }

    #[benchmark]
    fn pause() {
        let (owner, _) = setup_ledger::<T>();

        #[extrinsic_call]
        _(RawOrigin::Signed(owner));

        assert_eq!(Paused::<T>::get(), true);
    }

    #[benchmark]
    fn unpause() {
        let (owner, _) = setup_ledger::<T>();
        Paused::<T>::put(true);

        #[extrinsic_call]
        _(RawOrigin::Signed(owner));

        assert_eq!(Paused::<T>::get(), false);
    }

    #[benchmark]
    fn set_minter() {
        let (owner, _) = setup_ledger::<T>();
        let new_minter: T::AccountId = account("new_minter", 0, 0);

        #[extrinsic_call]
        _(RawOrigin::Signed(owner), new_minter.clone());

        assert_eq!(Minter::<T>::get(), Some(new_minter));
    }

    #[benchmark]
    fn authorize_upgrade() {
        let (owner, _) = setup_ledger::<T>();
        let code_hash = T::Hash::default();

        #[extrinsic_call]
        _(RawOrigin::Signed(owner), code_hash);

        assert_eq!(AuthorizedUpgrade::<T>::get(), Some(code_hash));
    }

    impl_benchmark_test_suite!(FusioToken, crate::mock::new_test_ext(), crate::mock::Test);
}
