#![no_std]
use soroban_sdk::{contract, contracterror, contractimpl, contracttype, Address, Env, String};

mod events;
mod storage;


/// Highest accepted rarity on the 1-5 scale.
pub const MAX_RARITY_LEVEL: u32 = 5;

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Variety {
    pub id: u32,
    pub name: String,
    pub species: String,
    pub origin: String,
    pub description: String,
    pub year_documented: u32,
    pub rarity_level: u32,
    pub registered_by: Address,
    /// Ledger sequence at registration.
    pub registration_height: u32,
    pub active: bool,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Steward {
    /// Ledger sequence at which the steward was (last) added.
    pub since: u32,
    pub active: bool,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[contracterror]
#[repr(u32)]
pub enum RegistryError {
    InvalidRarity = 1,
    NotFound = 2,
    Unauthorized = 3,
    AlreadyInitialized = 4,
    NotInitialized = 5,
    IdSpaceExhausted = 6,
}

#[contract]
pub struct SeedVarietyRegistry;

#[contractimpl]
impl SeedVarietyRegistry {
    // ========================================================================
    // Admin
    // ========================================================================

    /// Record the registry admin. Registry operations work without it.
    pub fn initialize(env: Env, admin: Address) -> Result<(), RegistryError> {
        admin.require_auth();

        if storage::has_admin(&env) {
            return Err(RegistryError::AlreadyInitialized);
        }

        storage::set_admin(&env, &admin);
        Ok(())
    }

    pub fn get_admin(env: Env) -> Option<Address> {
        storage::get_admin(&env)
    }

    /// Hand the admin role to another address
    pub fn update_admin(
        env: Env,
        caller: Address,
        new_admin: Address,
    ) -> Result<(), RegistryError> {
        caller.require_auth();

        let admin = storage::get_admin(&env).ok_or(RegistryError::NotInitialized)?;

        if caller != admin {
            return Err(RegistryError::Unauthorized);
        }

        storage::set_admin(&env, &new_admin);
        events::admin_updated(&env, &new_admin);
        Ok(())
    }

    // ========================================================================
    // Variety Management
    // ========================================================================

    /// Register a new variety; the caller becomes its first steward.
    ///
    /// Returns the id assigned to the variety.
    #[allow(clippy::too_many_arguments)]
    pub fn register_variety(
        env: Env,
        caller: Address,
        name: String,
        species: String,
        origin: String,
        description: String,
        year_documented: u32,
        rarity_level: u32,
    ) -> Result<u32, RegistryError> {
        caller.require_auth();

        if rarity_level > MAX_RARITY_LEVEL {
            return Err(RegistryError::InvalidRarity);
        }

        let variety_id = storage::get_next_variety_id(&env);
        let next_id = variety_id
            .checked_add(1)
            .ok_or(RegistryError::IdSpaceExhausted)?;
        let height = env.ledger().sequence();

        let variety = Variety {
            id: variety_id,
            name,
            species,
            origin,
            description,
            year_documented,
            rarity_level,
            registered_by: caller.clone(),
            registration_height: height,
            active: true,
        };
        storage::set_variety(&env, &variety);

        storage::set_steward(
            &env,
            variety_id,
            &caller,
            &Steward {
                since: height,
                active: true,
            },
        );

        storage::set_next_variety_id(&env, next_id);

        events::variety_registered(&env, &caller, variety_id);
        Ok(variety_id)
    }

    /// Replace the name, description and rarity of a variety.
    pub fn update_variety_details(
        env: Env,
        caller: Address,
        variety_id: u32,
        name: String,
        description: String,
        rarity_level: u32,
    ) -> Result<(), RegistryError> {
        caller.require_auth();

        let mut variety = Self::load_for_steward(&env, variety_id, &caller)?;

        if rarity_level > MAX_RARITY_LEVEL {
            return Err(RegistryError::InvalidRarity);
        }

        variety.name = name;
        variety.description = description;
        variety.rarity_level = rarity_level;
        storage::set_variety(&env, &variety);

        events::variety_updated(&env, &caller, variety_id);
        Ok(())
    }

    /// Grant stewardship of a variety to another address.
    ///
    /// Re-adding an existing steward refreshes its `since` height.
    pub fn add_steward(
        env: Env,
        caller: Address,
        variety_id: u32,
        new_steward: Address,
    ) -> Result<(), RegistryError> {
        caller.require_auth();

        Self::load_for_steward(&env, variety_id, &caller)?;

        storage::set_steward(
            &env,
            variety_id,
            &new_steward,
            &Steward {
                since: env.ledger().sequence(),
                active: true,
            },
        );

        events::steward_added(&env, &new_steward, variety_id);
        Ok(())
    }

    /// Mark a variety inactive. There is no way back.
    pub fn deactivate_variety(
        env: Env,
        caller: Address,
        variety_id: u32,
    ) -> Result<(), RegistryError> {
        caller.require_auth();

        let mut variety = Self::load_for_steward(&env, variety_id, &caller)?;

        variety.active = false;
        storage::set_variety(&env, &variety);

        events::variety_deactivated(&env, &caller, variety_id);
        Ok(())
    }

    // ========================================================================
    // Queries
    // ========================================================================

    pub fn get_variety(env: Env, variety_id: u32) -> Option<Variety> {
        storage::get_variety(&env, variety_id)
    }

    pub fn is_steward(env: Env, variety_id: u32, steward: Address) -> bool {
        storage::get_steward(&env, variety_id, &steward)
            .map(|record| record.active)
            .unwrap_or(false)
    }

    pub fn get_steward(env: Env, variety_id: u32, steward: Address) -> Option<Steward> {
        storage::get_steward(&env, variety_id, &steward)
    }

    pub fn get_next_variety_id(env: Env) -> u32 {
        storage::get_next_variety_id(&env)
    }

    // ========================================================================
    // Helper Functions
    // ========================================================================

    /// Existence is checked before stewardship, so an unknown id always
    /// reports `NotFound`.
    fn load_for_steward(
        env: &Env,
        variety_id: u32,
        caller: &Address,
    ) -> Result<Variety, RegistryError> {
        let variety = storage::get_variety(env, variety_id).ok_or(RegistryError::NotFound)?;

        if !Self::is_steward(env.clone(), variety_id, caller.clone()) {
            return Err(RegistryError::Unauthorized);
        }

        Ok(variety)
    }
}
