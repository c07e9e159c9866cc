#![cfg_attr(not(feature = "std"), no_std)]
// Constant extrinsic weights until benchmark-derived weights land
#![allow(deprecated)]
#![allow(clippy::let_unit_value)]

use frame_support::{dispatch::DispatchResult, ensure, pallet_prelude::*};
use frame_system::{ensure_signed, pallet_prelude::*};
use sp_runtime::traits::TrailingZeroInput;

pub use pallet::*;

pub mod migrations;

#[cfg(test)]
mod mock;


#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

/// The current storage version.
const STORAGE_VERSION: StorageVersion = StorageVersion::new(1);

#[frame_support::pallet]
pub mod pallet {
    use super::*;

    #[pallet::config]
    pub trait Config: frame_system::Config {
        type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;

        /// Hard ceiling on total issuance. Fixed at deploy time and carried
        /// unchanged across logic upgrades.
        #[pallet::constant]
        type MaxSupply: Get<u128>;
    }

    #[pallet::pallet]
    #[pallet::storage_version(STORAGE_VERSION)]
    pub struct Pallet<T>(_);

    /// Token name (e.g., "Fusio")
    #[pallet::storage]
    #[pallet::getter(fn token_name)]
    pub type TokenName<T> = StorageValue<_, BoundedVec<u8, ConstU32<64>>, ValueQuery>;

    /// Token symbol (e.g., "FIO")
    #[pallet::storage]
    #[pallet::getter(fn token_symbol)]
    pub type TokenSymbol<T> = StorageValue<_, BoundedVec<u8, ConstU32<16>>, ValueQuery>;

    /// Units issued so far. Never exceeds `T::MaxSupply`.
    #[pallet::storage]
    #[pallet::getter(fn total_supply)]
    pub type TotalSupply<T> = StorageValue<_, u128, ValueQuery>;

    /// Account balances
    #[pallet::storage]
    #[pallet::getter(fn balance_of)]
    pub type Balances<T: Config> = StorageMap<_, Blake2_128Concat, T::AccountId, u128, ValueQuery>;

    /// Spending approvals: (holder, spender) -> approved amount
    #[pallet::storage]
    #[pallet::getter(fn allowance)]
    pub type Allowances<T: Config> = StorageDoubleMap<
        _,
        Blake2_128Concat,
        T::AccountId,
        Blake2_128Concat,
        T::AccountId,
        u128,
        ValueQuery,
    >;

    /// Administrative identity: pause/unpause, minter rotation, upgrade authorization.
    #[pallet::storage]
    #[pallet::getter(fn owner)]
    pub type Owner<T: Config> = StorageValue<_, T::AccountId, OptionQuery>;

    /// Identity allowed to create new supply.
    #[pallet::storage]
    #[pallet::getter(fn minter)]
    pub type Minter<T: Config> = StorageValue<_, T::AccountId, OptionQuery>;

    /// When true, every balance-mutating call is rejected.
    #[pallet::storage]
    #[pallet::getter(fn paused)]
    pub type Paused<T> = StorageValue<_, bool, ValueQuery>;

    /// One-shot flag set by `initialize`.
    #[pallet::storage]
    #[pallet::getter(fn initialized)]
    pub type Initialized<T> = StorageValue<_, bool, ValueQuery>;

    /// Hash of the logic the owner has cleared for the platform to swap in.
    #[pallet::storage]
    #[pallet::getter(fn authorized_upgrade)]
    pub type AuthorizedUpgrade<T: Config> = StorageValue<_, T::Hash, OptionQuery>;

    #[pallet::event]
    #[pallet::generate_deposit(pub(super) fn deposit_event)]
    pub enum Event<T: Config> {
        /// Ledger initialized; the full max supply sits with `owner`
        Initialized { owner: T::AccountId, minter: T::AccountId },
        /// Balance moved. Mints come from the null identity, burns go to it
        Transferred { from: T::AccountId, to: T::AccountId, amount: u128 },
        /// Approval set for (owner, spender)
        Approval { owner: T::AccountId, spender: T::AccountId, amount: u128 },
        /// Minter role rotated by the owner
        MinterChanged { old: Option<T::AccountId>, new: T::AccountId },
        /// Pause flag flipped
        PauseToggled { paused: bool },
        /// Owner cleared a new logic hash for the next code swap
        UpgradeAuthorized { code_hash: T::Hash },
    }

    #[pallet::error]
    pub enum Error<T> {
        /// `initialize` already ran
        AlreadyInitialized,
        /// The null identity was supplied where a real one is required
        InvalidZeroAddress,
        /// Caller does not hold the role the call requires
        UnauthorizedCaller,
        /// Mint would push total issuance past the max supply
        SupplyCapExceeded,
        InsufficientBalance,
        InsufficientAllowance,
        /// Balance-mutating call (or a second `pause`) while the ledger is paused
        EnforcedPause,
        /// `unpause` while the ledger is not paused
        ExpectedPause,
        Overflow,
    }

    #[pallet::call]
    impl<T: Config> Pallet<T> {
        /// One-shot ledger setup. Credits the full `MaxSupply` to `owner`,
        /// so later mints only succeed once supply has been burned.
        #[pallet::call_index(0)]
        #[pallet::weight(10_000)]
        pub fn initialize(
            origin: OriginFor<T>,
            name: BoundedVec<u8, ConstU32<64>>,
            symbol: BoundedVec<u8, ConstU32<16>>,
            minter: T::AccountId,
            owner: T::AccountId,
        ) -> DispatchResult {
            ensure_signed(origin)?;
            ensure!(!Initialized::<T>::get(), Error::<T>::AlreadyInitialized);
            Self::ensure_real_identity(&minter)?;
            Self::ensure_real_identity(&owner)?;

            TokenName::<T>::put(name);
            TokenSymbol::<T>::put(symbol);
            Minter::<T>::put(&minter);
            Owner::<T>::put(&owner);

            let cap = T::MaxSupply::get();
            Balances::<T>::insert(&owner, cap);
            TotalSupply::<T>::put(cap);
            Initialized::<T>::put(true);

            Self::deposit_event(Event::Initialized { owner: owner.clone(), minter });
            Self::deposit_event(Event::Transferred {
                from: Self::null_identity(),
                to: owner,
                amount: cap,
            });
            Ok(())
        }

        #[pallet::call_index(1)]
        #[pallet::weight(10_000)]
        pub fn mint(origin: OriginFor<T>, to: T::AccountId, amount: u128) -> DispatchResult {
            let who = ensure_signed(origin)?;
            ensure!(Minter::<T>::get().as_ref() == Some(&who), Error::<T>::UnauthorizedCaller);
            Self::ensure_not_paused()?;
            Self::ensure_real_identity(&to)?;

            let issued = TotalSupply::<T>::get()
                .checked_add(amount)
                .ok_or(Error::<T>::Overflow)?;
            ensure!(issued <= T::MaxSupply::get(), Error::<T>::SupplyCapExceeded);

            Self::credit(&to, amount)?;
            TotalSupply::<T>::put(issued);

            Self::deposit_event(Event::Transferred {
                from: Self::null_identity(),
                to,
                amount,
            });
            Ok(())
        }

        /// Destroys `amount` units of the caller's own balance.
        #[pallet::call_index(2)]
        #[pallet::weight(10_000)]
        pub fn burn(origin: OriginFor<T>, amount: u128) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_not_paused()?;

            let balance = Balances::<T>::get(&who);
            ensure!(balance >= amount, Error::<T>::InsufficientBalance);

            Balances::<T>::insert(&who, balance - amount);
            TotalSupply::<T>::mutate(|supply| *supply -= amount);

            Self::deposit_event(Event::Transferred {
                from: who,
                to: Self::null_identity(),
                amount,
            });
            Ok(())
        }

        #[pallet::call_index(3)]
        #[pallet::weight(10_000)]
        pub fn transfer(origin: OriginFor<T>, to: T::AccountId, amount: u128) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_not_paused()?;
            Self::ensure_real_identity(&to)?;
            Self::move_balance(&who, &to, amount)
        }

        /// Sets (overwrites) the amount `spender` may move out of the caller's balance.
        #[pallet::call_index(4)]
        #[pallet::weight(10_000)]
        pub fn approve(
            origin: OriginFor<T>,
            spender: T::AccountId,
            amount: u128,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_not_paused()?;
            Self::ensure_real_identity(&spender)?;

            Allowances::<T>::insert(&who, &spender, amount);
            Self::deposit_event(Event::Approval { owner: who, spender, amount });
            Ok(())
        }

        #[pallet::call_index(5)]
        #[pallet::weight(10_000)]
        pub fn transfer_from(
            origin: OriginFor<T>,
            from: T::AccountId,
            to: T::AccountId,
            amount: u128,
        ) -> DispatchResult {
            let spender = ensure_signed(origin)?;
            Self::ensure_not_paused()?;
            Self::ensure_real_identity(&to)?;

            let approved = Allowances::<T>::get(&from, &spender);
            ensure!(approved >= amount, Error::<T>::InsufficientAllowance);

            Self::move_balance(&from, &to, amount)?;
            Allowances::<T>::insert(&from, &spender, approved - amount);
            Ok(())
        }

        #[pallet::call_index(6)]
        #[pallet::weight(10_000)]
        pub fn pause(origin: OriginFor<T>) -> DispatchResult {
            Self::ensure_owner(origin)?;
            ensure!(!Paused::<T>::get(), Error::<T>::EnforcedPause);

            Paused::<T>::put(true);
            Self::deposit_event(Event::PauseToggled { paused: true });
            Ok(())
        }

        #[pallet::call_index(7)]
        #[pallet::weight(10_000)]
        pub fn unpause(origin: OriginFor<T>) -> DispatchResult {
            Self::ensure_owner(origin)?;
            ensure!(Paused::<T>::get(), Error::<T>::ExpectedPause);

            Paused::<T>::put(false);
            Self::deposit_event(Event::PauseToggled { paused: false });
            Ok(())
        }

        #[pallet::call_index(8)]
        #[pallet::weight(10_000)]
        pub fn set_minter(origin: OriginFor<T>, new_minter: T::AccountId) -> DispatchResult {
            Self::ensure_owner(origin)?;
            Self::ensure_real_identity(&new_minter)?;

            let old = Minter::<T>::get();
            Minter::<T>::put(&new_minter);
            Self::deposit_event(Event::MinterChanged { old, new: new_minter });
            Ok(())
        }

        /// Records the logic hash the platform may swap in. Storage is never
        /// touched here; the swap itself runs through `migrations` so every
        /// ledger entry survives the upgrade byte-for-byte.
        #[pallet::call_index(9)]
        #[pallet::weight(10_000)]
        pub fn authorize_upgrade(origin: OriginFor<T>, code_hash: T::Hash) -> DispatchResult {
            Self::ensure_owner(origin)?;

            AuthorizedUpgrade::<T>::put(code_hash);
            Self::deposit_event(Event::UpgradeAuthorized { code_hash });
            Ok(())
        }
    }
}

impl<T: Config> Pallet<T> {
    /// The all-zeroes account. Stands in for "no one" in mint/burn
    /// notifications and is rejected as a real participant.
    pub fn null_identity() -> T::AccountId {
        T::AccountId::decode(&mut TrailingZeroInput::zeroes())
            .expect("infinite length input; no invalid inputs for type; qed")
    }

    fn ensure_owner(origin: OriginFor<T>) -> Result<T::AccountId, DispatchError> {
        let who = ensure_signed(origin)?;
        ensure!(Owner::<T>::get().as_ref() == Some(&who), Error::<T>::UnauthorizedCaller);
        Ok(who)
    }

    fn ensure_not_paused() -> DispatchResult {
        ensure!(!Paused::<T>::get(), Error::<T>::EnforcedPause);
        Ok(())
    }

    fn ensure_real_identity(account: &T::AccountId) -> DispatchResult {
        ensure!(*account != Self::null_identity(), Error::<T>::InvalidZeroAddress);
        Ok(())
    }

    /// Checked balance move shared by `transfer` and `transfer_from`.
    /// Debits before crediting so a self-transfer nets out to a no-op.
    fn move_balance(from: &T::AccountId, to: &T::AccountId, amount: u128) -> DispatchResult {
        let from_balance = Balances::<T>::get(from);
        ensure!(from_balance >= amount, Error::<T>::InsufficientBalance);

        Balances::<T>::insert(from, from_balance - amount);
        Self::credit(to, amount)?;

        Self::deposit_event(Event::Transferred {
            from: from.clone(),
            to: to.clone(),
            amount,
        });
        Ok(())
    }

    fn credit(to: &T::AccountId, amount: u128) -> DispatchResult {
        let balance = Balances::<T>::get(to)
            .checked_add(amount)
            .ok_or(Error::<T>::Overflow)?;
        Balances::<T>::insert(to, balance);
        Ok(())
    }
}
