use soroban_sdk::{symbol_short, Address, Env, Symbol};

use crate::{Steward, Variety};

const ADMIN: Symbol = symbol_short!("admin");
const NEXT_ID: Symbol = symbol_short!("next_id");
const VARIETY: Symbol = symbol_short!("variety");
const STEWARD: Symbol = symbol_short!("steward");

pub fn get_admin(env: &Env) -> Option<Address> {
    env.storage().instance().get(&ADMIN)
}

pub fn has_admin(env: &Env) -> bool {
    env.storage().instance().has(&ADMIN)
}

pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&ADMIN, admin);
}

/// Ids start at 1, so an untouched counter reads as 1.
pub fn get_next_variety_id(env: &Env) -> u32 {
    env.storage().instance().get(&NEXT_ID).unwrap_or(1)
}

pub fn set_next_variety_id(env: &Env, next_id: u32) {
    env.storage().instance().set(&NEXT_ID, &next_id);
}

pub fn get_variety(env: &Env, variety_id: u32) -> Option<Variety> {
    env.storage().persistent().get(&(VARIETY, variety_id))
}

pub fn set_variety(env: &Env, variety: &Variety) {
    env.storage()
        .persistent()
        .set(&(VARIETY, variety.id), variety);
}

pub fn get_steward(env: &Env, variety_id: u32, steward: &Address) -> Option<Steward> {
    env.storage()
        .persistent()
        .get(&(STEWARD, variety_id, steward.clone()))
}

pub fn set_steward(env: &Env, variety_id: u32, steward: &Address, record: &Steward) {
    env.storage()
        .persistent()
        .set(&(STEWARD, variety_id, steward.clone()), record);
}
