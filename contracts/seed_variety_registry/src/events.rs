use soroban_sdk::{symbol_short, Address, Env, Symbol};

const VARIETY: Symbol = symbol_short!("variety");
const ADMIN: Symbol = symbol_short!("admin");

pub fn variety_registered(env: &Env, registrant: &Address, variety_id: u32) {
    env.events().publish(
        (VARIETY, symbol_short!("register"), registrant.clone()),
        variety_id,
    );
}

pub fn variety_updated(env: &Env, steward: &Address, variety_id: u32) {
    env.events().publish(
        (VARIETY, symbol_short!("update"), steward.clone()),
        variety_id,
    );
}

pub fn steward_added(env: &Env, new_steward: &Address, variety_id: u32) {
    env.events().publish(
        (VARIETY, symbol_short!("steward"), new_steward.clone()),
        variety_id,
    );
}

pub fn variety_deactivated(env: &Env, steward: &Address, variety_id: u32) {
    env.events().publish(
        (VARIETY, symbol_short!("inactive"), steward.clone()),
        variety_id,
    );
}

pub fn admin_updated(env: &Env, new_admin: &Address) {
    env.events()
        .publish((ADMIN, symbol_short!("update")), new_admin.clone());
}
