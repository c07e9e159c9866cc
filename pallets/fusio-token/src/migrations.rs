//! Storage migrations for pallet-fusio-token.
//!
//! The ledger's storage layout is versioned independently from its logic:
//! `authorize_upgrade` clears a new code hash, the platform swaps the logic,
//! and the migrations here are the only code allowed to touch the layout
//! while that happens. Each migration is keyed to a storage version and runs
//! exactly once, so re-applying an upgrade is a no-op.
//!
//! When the layout actually changes:
//!
//! 1. Increment `STORAGE_VERSION` in `lib.rs`.
//! 2. Add a `vN::MigrateToVN` module implementing `OnRuntimeUpgrade` that
//!    checks `on_chain_storage_version() < N` before transforming anything.
//! 3. Add tests covering the transformation and its idempotency.
//! 4. Wire the migration into the host's `Executive` migration tuple.
//!
//! A migration that does not rewrite a storage item must leave it
//! byte-for-byte intact; the ledger, allowances, roles and pause flag all
//! persist across the swap.

use frame_support::{pallet_prelude::*, traits::OnRuntimeUpgrade};
use sp_std::marker::PhantomData;

use crate::{Config, Pallet};

/// Migration to version 1 (initial release).
///
/// v1 is the first layout, so there is nothing to transform; this module
/// pins down the pattern and the version bookkeeping that later migrations
/// build on.
pub mod v1 {
    use super::*;

    pub struct MigrateToV1<T>(PhantomData<T>);

    impl<T: Config> OnRuntimeUpgrade for MigrateToV1<T> {
        fn on_runtime_upgrade() -> Weight {
            let on_chain_version = Pallet::<T>::on_chain_storage_version();

            if on_chain_version < 1 {
                // v0 -> v1: initial layout, no storage changes needed.
                log::info!(
                    target: "pallet-fusio-token",
                    "Running migration v0 -> v1 (no-op for initial release)"
                );

                StorageVersion::new(1).put::<Pallet<T>>();

                T::DbWeight::get().reads_writes(1, 1)
            } else {
                log::info!(
                    target: "pallet-fusio-token",
                    "Storage already at v{on_chain_version:?}, skipping v1 migration"
                );

                T::DbWeight::get().reads(1)
            }
        }

        #[cfg(feature = "try-runtime")]
        fn pre_upgrade() -> Result<sp_std::vec::Vec<u8>, sp_runtime::TryRuntimeError> {
            let on_chain_version = Pallet::<T>::on_chain_storage_version();
            log::info!(
                target: "pallet-fusio-token",
                "Pre-upgrade: on-chain storage version is {:?}",
                on_chain_version
            );

            Ok(on_chain_version.encode())
        }

        #[cfg(feature = "try-runtime")]
        fn post_upgrade(state: sp_std::vec::Vec<u8>) -> Result<(), sp_runtime::TryRuntimeError> {
            let pre_version: u16 = Decode::decode(&mut &state[..])
                .map_err(|_| sp_runtime::TryRuntimeError::Other("Failed to decode pre-state"))?;

            let post_version = Pallet::<T>::on_chain_storage_version();

            log::info!(
                target: "pallet-fusio-token",
                "Post-upgrade: version changed from {} to {:?}",
                pre_version,
                post_version
            );

            if pre_version < 1 {
                frame_support::ensure!(
                    post_version >= 1,
                    sp_runtime::TryRuntimeError::Other("Migration to v1 did not complete")
                );
            }

            Ok(())
        }
    }
}
