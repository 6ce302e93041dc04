use crate::types::*;
use crate::vesting::VestingSchedule;
use crate::{allowlist, classes, events, lifecycle, pricing, storage};
use fp_math::MAX_DECIMALS;
use seed_interface::{validate_seed_params, SeedError, SeedParams};
use soroban_sdk::{
    contract, contractimpl, contractmeta, log, token, vec, Address, Bytes, Env, String, Vec,
};

// Metadata that is added on to every WASM custom section
contractmeta!(
    key = "Description",
    val = "Seed sale with contributor classes, allowlist and linear vesting"
);

#[contract]
pub struct SeedSale;

fn require_admin(env: &Env) -> Result<SaleConfig, SeedError> {
    let config = storage::get_config(env)?;
    config.admin.require_auth();
    Ok(config)
}

/// Admin and treasury may both move funds out of the sale.
fn require_admin_or_treasury(env: &Env, caller: &Address) -> Result<SaleConfig, SeedError> {
    caller.require_auth();
    let config = storage::get_config(env)?;
    if *caller != config.admin && *caller != config.treasury {
        return Err(SeedError::Unauthorized);
    }
    Ok(config)
}

fn funder_schedule(
    env: &Env,
    state: &SaleState,
    funder: &Funder,
) -> Result<VestingSchedule, SeedError> {
    let (_, class) = classes::load(env, funder.class)?;
    Ok(VestingSchedule {
        start_time: state.vesting_start_time,
        cliff: class.vesting_cliff,
        duration: class.vesting_duration,
    })
}

fn tip_schedule(state: &SaleState, tip: &Tip) -> VestingSchedule {
    VestingSchedule {
        start_time: state.vesting_start_time,
        cliff: tip.vesting_cliff,
        duration: tip.vesting_duration,
    }
}

/// Resolves an optional claim request against what is claimable right now.
fn claim_request(claimable: i128, requested: Option<i128>) -> Result<i128, SeedError> {
    if claimable <= 0 {
        return Err(SeedError::NothingClaimable);
    }
    match requested {
        None => Ok(claimable),
        Some(amount) if amount <= 0 => Err(SeedError::ZeroAmount),
        Some(amount) if amount > claimable => Err(SeedError::ExceedsClaimable),
        Some(amount) => Ok(amount),
    }
}

#[contractimpl]
impl SeedSale {
    /// Initialize the sale. Runs exactly once, normally from the factory in
    /// the same invocation that deployed the instance.
    pub fn initialize(env: Env, params: SeedParams) -> Result<(), SeedError> {
        if storage::has_config(&env) {
            return Err(SeedError::AlreadyInitialized);
        }
        let checked = validate_seed_params(&env, &params)?;

        let sale_decimals = token::Client::new(&env, &checked.sale_token).decimals();
        let funding_decimals = token::Client::new(&env, &checked.funding_token).decimals();
        if sale_decimals > MAX_DECIMALS || funding_decimals > MAX_DECIMALS {
            return Err(SeedError::InvalidDecimals);
        }

        let total_buyable_sale = pricing::convert(
            checked.hard_cap,
            params.price,
            sale_decimals,
            funding_decimals,
        )?;
        let tip_amount = pricing::tip_amount(total_buyable_sale, params.tip.tip_percentage)?;
        let sale_amount_required = total_buyable_sale
            .checked_add(tip_amount)
            .ok_or(SeedError::MathOverflow)?;
        let vesting_start_time = params
            .end_time
            .checked_add(1)
            .ok_or(SeedError::InvalidTime)?;

        let config = SaleConfig {
            beneficiary: params.beneficiary.clone(),
            admin: params.admin.clone(),
            treasury: params.treasury.clone(),
            sale_token: checked.sale_token,
            funding_token: checked.funding_token,
            sale_decimals,
            funding_decimals,
            soft_cap: checked.soft_cap,
            hard_cap: checked.hard_cap,
            price: params.price,
            start_time: params.start_time,
            end_time: params.end_time,
            permissioned: params.permissioned,
            total_buyable_sale,
            sale_amount_required,
        };
        let state = SaleState {
            paused: false,
            closed: false,
            funded: false,
            funding_collected: 0,
            funding_withdrawn: 0,
            sale_allocated: 0,
            sale_claimed: 0,
            sale_retrieved: 0,
            funder_count: 0,
            vesting_start_time,
        };
        let tip = Tip {
            tip_percentage: params.tip.tip_percentage,
            tip_amount,
            vesting_cliff: params.tip.vesting_cliff,
            vesting_duration: params.tip.vesting_duration,
            total_claimed: 0,
        };
        let default_class = ContributorClass {
            class_name: String::from_str(&env, ""),
            class_cap: config.hard_cap,
            individual_cap: params.default_class.individual_cap,
            vesting_cliff: params.default_class.vesting_cliff,
            vesting_duration: params.default_class.vesting_duration,
            class_funding_collected: 0,
        };

        storage::set_config(&env, &config);
        storage::set_state(&env, &state);
        storage::set_tip(&env, &tip);
        storage::set_metadata(&env, &params.metadata);
        storage::set_class(&env, 0, &default_class);
        storage::set_class_count(&env, 1);
        for member in params.allowlist.iter() {
            allowlist::assign(&env, &config, &member, ClassId::Default)?;
        }

        events::initialized(&env, &config.admin, sale_amount_required);
        Ok(())
    }

    // ---------------------------------------------------------------------
    // Class registry and allowlist
    // ---------------------------------------------------------------------

    pub fn add_class(env: Env, params: ClassParams) -> Result<ClassId, SeedError> {
        let created = Self::add_classes(env.clone(), vec![&env, params])?;
        created.get(0).ok_or(SeedError::InvalidClassId)
    }

    /// Adds up to 100 classes with their allowlists, all or nothing.
    pub fn add_classes(env: Env, batch: Vec<ClassParams>) -> Result<Vec<ClassId>, SeedError> {
        let config = require_admin(&env)?;
        let state = storage::get_state(&env)?;
        lifecycle::require_classes_modifiable(&config, &state, env.ledger().timestamp())?;

        let created = classes::add_classes(&env, &config, &batch)?;
        storage::extend_instance(&env);
        events::classes_added(&env, &created);
        Ok(created)
    }

    pub fn change_class(env: Env, class_id: ClassId, update: ClassUpdate) -> Result<(), SeedError> {
        let config = require_admin(&env)?;
        let state = storage::get_state(&env)?;
        if !classes::exists(&env, class_id) {
            return Err(SeedError::InvalidClassId);
        }
        lifecycle::require_classes_modifiable(&config, &state, env.ledger().timestamp())?;

        classes::change_class(&env, &config, class_id, &update)?;
        events::class_changed(&env, class_id);
        Ok(())
    }

    pub fn set_allowlist(
        env: Env,
        addresses: Vec<Address>,
        class_ids: Vec<ClassId>,
    ) -> Result<(), SeedError> {
        let config = require_admin(&env)?;
        let state = storage::get_state(&env)?;
        lifecycle::require_allowlist_modifiable(&config, &state, env.ledger().timestamp())?;

        allowlist::set_allowlist(&env, &config, &addresses, &class_ids)?;
        events::allowlisted(&env, &addresses);
        Ok(())
    }

    pub fn un_allowlist(env: Env, addresses: Vec<Address>) -> Result<(), SeedError> {
        let config = require_admin(&env)?;
        if !config.permissioned {
            return Err(SeedError::NotPermissioned);
        }
        let state = storage::get_state(&env)?;
        lifecycle::require_allowlist_modifiable(&config, &state, env.ledger().timestamp())?;

        allowlist::un_allowlist(&env, &addresses);
        events::unlisted(&env, &addresses);
        Ok(())
    }

    // ---------------------------------------------------------------------
    // Lifecycle
    // ---------------------------------------------------------------------

    /// Buy sale tokens with `amount` funding tokens.
    ///
    /// Going over the buyer's individual cap is rejected outright. Going over
    /// the class cap or the hard cap is not: the purchase shrinks to the room
    /// left and only that much is pulled from the buyer. Returns the sale
    /// tokens allocated by this purchase.
    pub fn buy(env: Env, buyer: Address, amount: i128) -> Result<i128, SeedError> {
        buyer.require_auth();
        let config = storage::get_config(&env)?;
        let mut state = storage::get_state(&env)?;
        let now = env.ledger().timestamp();
        lifecycle::require_purchasable(&config, &state, now)?;

        let this = env.current_contract_address();
        if !state.funded {
            let sale_balance = token::Client::new(&env, &config.sale_token).balance(&this);
            if sale_balance < config.sale_amount_required {
                return Err(SeedError::SaleNotFunded);
            }
            state.funded = true;
            log!(&env, "sale funded", sale_balance);
        }

        let mut funder = storage::get_funder(&env, &buyer);
        if config.permissioned && !funder.allowlisted {
            return Err(SeedError::NotAllowlisted);
        }
        if amount <= 0 {
            return Err(SeedError::ZeroAmount);
        }

        let (class_index, mut class) = classes::load(&env, funder.class)?;
        let individual_room = class
            .individual_cap
            .saturating_sub(funder.funding_amount)
            .max(0);
        if amount > individual_room {
            return Err(SeedError::IndividualCapExceeded);
        }
        let class_room = class
            .class_cap
            .saturating_sub(class.class_funding_collected)
            .max(0);
        let global_room = config.hard_cap - state.funding_collected;
        let accepted = amount.min(class_room).min(global_room);
        if accepted <= 0 {
            return Err(SeedError::ClassCapReached);
        }
        if accepted < amount {
            log!(&env, "purchase clamped", amount, accepted);
        }

        let previous_allocation = pricing::funding_to_sale(&config, funder.funding_amount)?;
        let funding_amount = funder
            .funding_amount
            .checked_add(accepted)
            .ok_or(SeedError::MathOverflow)?;
        let allocation = pricing::funding_to_sale(&config, funding_amount)?;
        let purchased = allocation - previous_allocation;

        token::Client::new(&env, &config.funding_token).transfer(&buyer, &this, &accepted);

        if funder.funding_amount == 0 {
            state.funder_count += 1;
        }
        funder.funding_amount = funding_amount;
        class.class_funding_collected += accepted;
        state.funding_collected += accepted;
        state.sale_allocated += purchased;
        if lifecycle::maximum_reached(&config, &state) && now < state.vesting_start_time {
            state.vesting_start_time = now;
            log!(&env, "hard cap reached, vesting starts", now);
        }

        storage::set_funder(&env, &buyer, &funder);
        storage::set_class(&env, class_index, &class);
        storage::set_state(&env, &state);

        let remainder = config.total_buyable_sale - state.sale_allocated;
        events::purchase(&env, &buyer, purchased, remainder);
        Ok(purchased)
    }

    /// Ends the sale early. Before `end_time` vesting starts immediately.
    pub fn close(env: Env) -> Result<(), SeedError> {
        let config = require_admin(&env)?;
        let mut state = storage::get_state(&env)?;
        if state.closed {
            return Err(SeedError::AlreadyClosed);
        }
        let now = env.ledger().timestamp();
        state.closed = true;
        if now < config.end_time && now < state.vesting_start_time {
            state.vesting_start_time = now;
        }
        storage::set_state(&env, &state);
        events::closed(&env, state.vesting_start_time);
        Ok(())
    }

    pub fn pause(env: Env) -> Result<(), SeedError> {
        require_admin(&env)?;
        let mut state = storage::get_state(&env)?;
        if state.closed {
            return Err(SeedError::SaleClosed);
        }
        if state.paused {
            return Err(SeedError::AlreadyPaused);
        }
        state.paused = true;
        storage::set_state(&env, &state);
        events::paused(&env);
        Ok(())
    }

    pub fn unpause(env: Env) -> Result<(), SeedError> {
        require_admin(&env)?;
        let mut state = storage::get_state(&env)?;
        if state.closed {
            return Err(SeedError::SaleClosed);
        }
        if !state.paused {
            return Err(SeedError::NotPaused);
        }
        state.paused = false;
        storage::set_state(&env, &state);
        events::unpaused(&env);
        Ok(())
    }

    /// Sends every funding token held by the sale to the treasury once the
    /// soft cap is met. Returns the amount moved, zero when nothing is left.
    pub fn withdraw(env: Env, caller: Address) -> Result<i128, SeedError> {
        let config = require_admin_or_treasury(&env, &caller)?;
        let mut state = storage::get_state(&env)?;
        if !lifecycle::minimum_reached(&config, &state) {
            return Err(SeedError::SoftCapNotReached);
        }

        let this = env.current_contract_address();
        let funding = token::Client::new(&env, &config.funding_token);
        let balance = funding.balance(&this);
        if balance > 0 {
            funding.transfer(&this, &config.treasury, &balance);
            state.funding_withdrawn += balance;
            storage::set_state(&env, &state);
            events::withdrawn(&env, &config.treasury, balance);
        }
        Ok(balance)
    }

    /// Refunds a funder of a sale that ended below its soft cap.
    pub fn retrieve_funding_tokens(env: Env, funder: Address) -> Result<i128, SeedError> {
        funder.require_auth();
        let config = storage::get_config(&env)?;
        let mut state = storage::get_state(&env)?;
        lifecycle::require_ended(&config, &state, env.ledger().timestamp())?;
        if lifecycle::minimum_reached(&config, &state) {
            return Err(SeedError::SoftCapReached);
        }

        let mut record = storage::get_funder(&env, &funder);
        let refund = record.funding_amount;
        if refund <= 0 {
            return Err(SeedError::NothingToRetrieve);
        }
        let allocation = pricing::funding_to_sale(&config, refund)?;
        let (class_index, mut class) = classes::load(&env, record.class)?;

        record.funding_amount = 0;
        class.class_funding_collected = class.class_funding_collected.saturating_sub(refund).max(0);
        state.funding_collected -= refund;
        state.sale_allocated = state.sale_allocated.saturating_sub(allocation).max(0);

        storage::set_funder(&env, &funder, &record);
        storage::set_class(&env, class_index, &class);
        storage::set_state(&env, &state);

        token::Client::new(&env, &config.funding_token).transfer(
            &env.current_contract_address(),
            &funder,
            &refund,
        );
        events::refunded(&env, &funder, refund);
        Ok(refund)
    }

    /// Returns sale tokens nobody is owed once purchasing has stopped.
    ///
    /// A failed sale gives back its whole sale-token balance. A complete one
    /// keeps what funders and the beneficiary can still claim and returns the
    /// rest; repeated calls only move what arrived or freed up since.
    pub fn retrieve_seed_tokens(
        env: Env,
        caller: Address,
        refund_receiver: Address,
    ) -> Result<i128, SeedError> {
        let config = require_admin_or_treasury(&env, &caller)?;
        let mut state = storage::get_state(&env)?;
        if !lifecycle::has_ended(&config, &state, env.ledger().timestamp()) {
            return Err(SeedError::SaleStillLive);
        }

        let this = env.current_contract_address();
        let sale = token::Client::new(&env, &config.sale_token);
        let balance = sale.balance(&this);
        let amount = if lifecycle::minimum_reached(&config, &state) {
            let tip = storage::get_tip(&env)?;
            let owed_to_funders = state.sale_allocated - state.sale_claimed;
            let owed_to_beneficiary = tip.tip_amount - tip.total_claimed;
            balance
                .saturating_sub(owed_to_funders)
                .saturating_sub(owed_to_beneficiary)
                .max(0)
        } else {
            balance
        };
        if amount <= 0 {
            return Err(SeedError::NothingToRetrieve);
        }

        sale.transfer(&this, &refund_receiver, &amount);
        state.sale_retrieved += amount;
        storage::set_state(&env, &state);
        events::retrieved(&env, &refund_receiver, amount);
        Ok(amount)
    }

    // ---------------------------------------------------------------------
    // Vesting
    // ---------------------------------------------------------------------

    /// Claims vested sale tokens; `amount` defaults to everything claimable.
    pub fn claim(env: Env, funder: Address, amount: Option<i128>) -> Result<i128, SeedError> {
        funder.require_auth();
        let config = storage::get_config(&env)?;
        let mut state = storage::get_state(&env)?;
        let now = env.ledger().timestamp();
        lifecycle::require_ended(&config, &state, now)?;
        if !lifecycle::minimum_reached(&config, &state) {
            return Err(SeedError::SoftCapNotReached);
        }

        let mut record = storage::get_funder(&env, &funder);
        let allocated = pricing::funding_to_sale(&config, record.funding_amount)?;
        let claimable = funder_schedule(&env, &state, &record)?.claimable_amount(
            now,
            allocated,
            record.total_claimed,
        )?;
        let amount = claim_request(claimable, amount)?;

        record.total_claimed += amount;
        state.sale_claimed += amount;
        storage::set_funder(&env, &funder, &record);
        storage::set_state(&env, &state);

        token::Client::new(&env, &config.sale_token).transfer(
            &env.current_contract_address(),
            &funder,
            &amount,
        );
        events::claimed(&env, &funder, amount);
        Ok(amount)
    }

    /// Claims the beneficiary's vested tip.
    pub fn claim_tip(env: Env, amount: Option<i128>) -> Result<i128, SeedError> {
        let config = storage::get_config(&env)?;
        config.beneficiary.require_auth();
        let state = storage::get_state(&env)?;
        let now = env.ledger().timestamp();
        lifecycle::require_ended(&config, &state, now)?;
        if !lifecycle::minimum_reached(&config, &state) {
            return Err(SeedError::SoftCapNotReached);
        }

        let mut tip = storage::get_tip(&env)?;
        let claimable =
            tip_schedule(&state, &tip).claimable_amount(now, tip.tip_amount, tip.total_claimed)?;
        let amount = claim_request(claimable, amount)?;

        tip.total_claimed += amount;
        storage::set_tip(&env, &tip);
        storage::extend_instance(&env);

        token::Client::new(&env, &config.sale_token).transfer(
            &env.current_contract_address(),
            &config.beneficiary,
            &amount,
        );
        events::tip_claimed(&env, tip.total_claimed);
        Ok(amount)
    }

    pub fn update_metadata(env: Env, metadata: Bytes) -> Result<(), SeedError> {
        require_admin(&env)?;
        storage::set_metadata(&env, &metadata);
        events::metadata_updated(&env, &metadata);
        Ok(())
    }

    // ---------------------------------------------------------------------
    // Views
    // ---------------------------------------------------------------------

    pub fn get_config(env: Env) -> Result<SaleConfig, SeedError> {
        storage::get_config(&env)
    }

    pub fn get_state(env: Env) -> Result<SaleState, SeedError> {
        storage::get_state(&env)
    }

    pub fn get_funder(env: Env, funder: Address) -> Funder {
        storage::get_funder(&env, &funder)
    }

    pub fn get_class(env: Env, class_id: ClassId) -> Result<ContributorClass, SeedError> {
        classes::load(&env, class_id).map(|(_, class)| class)
    }

    pub fn get_all_classes(env: Env) -> ClassTable {
        classes::table(&env)
    }

    pub fn get_class_count(env: Env) -> u32 {
        storage::get_class_count(&env)
    }

    pub fn get_tip(env: Env) -> Result<Tip, SeedError> {
        storage::get_tip(&env)
    }

    pub fn get_metadata(env: Env) -> Bytes {
        storage::get_metadata(&env)
    }

    pub fn get_vesting_start_time(env: Env) -> Result<u64, SeedError> {
        Ok(storage::get_state(&env)?.vesting_start_time)
    }

    pub fn get_funding_collected(env: Env) -> Result<i128, SeedError> {
        Ok(storage::get_state(&env)?.funding_collected)
    }

    pub fn get_funder_count(env: Env) -> Result<u32, SeedError> {
        Ok(storage::get_state(&env)?.funder_count)
    }

    pub fn get_minimum_reached(env: Env) -> Result<bool, SeedError> {
        let config = storage::get_config(&env)?;
        Ok(lifecycle::minimum_reached(&config, &storage::get_state(&env)?))
    }

    pub fn get_maximum_reached(env: Env) -> Result<bool, SeedError> {
        let config = storage::get_config(&env)?;
        Ok(lifecycle::maximum_reached(&config, &storage::get_state(&env)?))
    }

    pub fn get_closed_status(env: Env) -> Result<bool, SeedError> {
        Ok(storage::get_state(&env)?.closed)
    }

    pub fn get_paused_status(env: Env) -> Result<bool, SeedError> {
        Ok(storage::get_state(&env)?.paused)
    }

    pub fn get_status(env: Env) -> Result<SaleStatus, SeedError> {
        let config = storage::get_config(&env)?;
        let state = storage::get_state(&env)?;
        Ok(lifecycle::status(&config, &state, env.ledger().timestamp()))
    }

    pub fn get_outcome(env: Env) -> Result<SaleOutcome, SeedError> {
        let config = storage::get_config(&env)?;
        let state = storage::get_state(&env)?;
        Ok(lifecycle::outcome(&config, &state, env.ledger().timestamp()))
    }

    /// Sale tokens not yet allocated to any funder.
    pub fn get_remaining_sale(env: Env) -> Result<i128, SeedError> {
        let config = storage::get_config(&env)?;
        Ok(config.total_buyable_sale - storage::get_state(&env)?.sale_allocated)
    }

    pub fn is_funded(env: Env) -> Result<bool, SeedError> {
        let config = storage::get_config(&env)?;
        if storage::get_state(&env)?.funded {
            return Ok(true);
        }
        let balance =
            token::Client::new(&env, &config.sale_token).balance(&env.current_contract_address());
        Ok(balance >= config.sale_amount_required)
    }

    /// Sale tokens allocated to `funder` by their contributions so far.
    pub fn sale_amount_for_funder(env: Env, funder: Address) -> Result<i128, SeedError> {
        let config = storage::get_config(&env)?;
        pricing::funding_to_sale(&config, storage::get_funder(&env, &funder).funding_amount)
    }

    /// Funding tokens that buy `sale_amount` sale tokens at the sale price.
    pub fn funding_for_sale_amount(env: Env, sale_amount: i128) -> Result<i128, SeedError> {
        let config = storage::get_config(&env)?;
        pricing::sale_to_funding(&config, sale_amount)
    }

    /// What `claim` would release for `funder` right now, zero while claims are closed.
    pub fn calculate_claim_funder(env: Env, funder: Address) -> Result<i128, SeedError> {
        let config = storage::get_config(&env)?;
        let state = storage::get_state(&env)?;
        let now = env.ledger().timestamp();
        if !lifecycle::has_ended(&config, &state, now) || !lifecycle::minimum_reached(&config, &state)
        {
            return Ok(0);
        }
        let record = storage::get_funder(&env, &funder);
        let allocated = pricing::funding_to_sale(&config, record.funding_amount)?;
        funder_schedule(&env, &state, &record)?.claimable_amount(
            now,
            allocated,
            record.total_claimed,
        )
    }

    pub fn calculate_claim_beneficiary(env: Env) -> Result<i128, SeedError> {
        let config = storage::get_config(&env)?;
        let state = storage::get_state(&env)?;
        let now = env.ledger().timestamp();
        if !lifecycle::has_ended(&config, &state, now) || !lifecycle::minimum_reached(&config, &state)
        {
            return Ok(0);
        }
        let tip = storage::get_tip(&env)?;
        tip_schedule(&state, &tip).claimable_amount(now, tip.tip_amount, tip.total_claimed)
    }
}
