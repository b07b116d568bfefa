//! Integration tests for the token migrator using cw-multi-test.
//!
//! Both sides of a pair are multi-bridge tokens unless noted otherwise.
//! A plain cw20-base token stands in for legacy deprecated tokens.

use cosmwasm_std::{Addr, Uint128};
use cw20::{Cw20Coin, Expiration};
use cw_multi_test::{App, AppResponse, ContractWrapper, Executor};

use token_migrator::msg::{
    ExecuteMsg, InstantiateMsg, MigratedTotalResponse, QueryMsg, TokenAddressResponse,
};

// ============================================================================
// Test Setup
// ============================================================================

fn contract_migrator() -> Box<dyn cw_multi_test::Contract<cosmwasm_std::Empty>> {
    let contract = ContractWrapper::new(
        token_migrator::contract::execute,
        token_migrator::contract::instantiate,
        token_migrator::contract::query,
    );
    Box::new(contract)
}

fn contract_token() -> Box<dyn cw_multi_test::Contract<cosmwasm_std::Empty>> {
    let contract = ContractWrapper::new(
        mintable_token::contract::execute,
        mintable_token::contract::instantiate,
        mintable_token::contract::query,
    );
    Box::new(contract)
}

fn contract_cw20() -> Box<dyn cw_multi_test::Contract<cosmwasm_std::Empty>> {
    let contract = ContractWrapper::new(
        cw20_base::contract::execute,
        cw20_base::contract::instantiate,
        cw20_base::contract::query,
    );
    Box::new(contract)
}

struct TestEnv {
    app: App,
    migrator: Addr,
    deprecated: Addr,
    upgraded: Addr,
    admin: Addr,
    user: Addr,
    /// Bridge authorized to mint the deprecated token in tests
    minter: Addr,
}

fn one_token() -> Uint128 {
    Uint128::from(1_000_000_000_000_000_000u128)
}

fn half_token() -> Uint128 {
    Uint128::from(500_000_000_000_000_000u128)
}

fn instantiate_token(app: &mut App, code_id: u64, admin: &Addr, symbol: &str) -> Addr {
    app.instantiate_contract(
        code_id,
        admin.clone(),
        &mintable_token::msg::InstantiateMsg {
            name: format!("{} token", symbol),
            symbol: symbol.to_string(),
            decimals: 18,
            owner: None,
        },
        &[],
        symbol,
        Some(admin.to_string()),
    )
    .unwrap()
}

/// Migrator initialized with `admin` as owner, pair registered and the
/// migrator authorized as a bridge on the upgraded token.
fn setup() -> TestEnv {
    let mut env = setup_unpaired();
    let admin = env.admin.clone();
    let (deprecated, upgraded) = (env.deprecated.clone(), env.upgraded.clone());
    let migrator = env.migrator.clone();

    upgrade_token(&mut env, &admin, &deprecated, &upgraded).unwrap();
    env.app
        .execute_contract(
            admin,
            upgraded,
            &mintable_token::msg::ExecuteMsg::AddBridge {
                bridge: migrator.to_string(),
            },
            &[],
        )
        .unwrap();

    env
}

fn setup_unpaired() -> TestEnv {
    let mut app = App::default();
    let admin = Addr::unchecked("terra1admin");
    let user = Addr::unchecked("terra1user");
    let minter = Addr::unchecked("terra1minter");

    let token_code_id = app.store_code(contract_token());
    let deprecated = instantiate_token(&mut app, token_code_id, &admin, "OLD");
    let upgraded = instantiate_token(&mut app, token_code_id, &admin, "NEW");

    app.execute_contract(
        admin.clone(),
        deprecated.clone(),
        &mintable_token::msg::ExecuteMsg::AddBridge {
            bridge: minter.to_string(),
        },
        &[],
    )
    .unwrap();

    let migrator_code_id = app.store_code(contract_migrator());
    let migrator = app
        .instantiate_contract(
            migrator_code_id,
            admin.clone(),
            &InstantiateMsg {
                owner: Some(admin.to_string()),
            },
            &[],
            "token-migrator",
            Some(admin.to_string()),
        )
        .unwrap();

    TestEnv {
        app,
        migrator,
        deprecated,
        upgraded,
        admin,
        user,
        minter,
    }
}

fn upgrade_token(
    env: &mut TestEnv,
    sender: &Addr,
    deprecated: &Addr,
    upgraded: &Addr,
) -> anyhow::Result<AppResponse> {
    env.app.execute_contract(
        sender.clone(),
        env.migrator.clone(),
        &ExecuteMsg::UpgradeToken {
            deprecated_token: deprecated.to_string(),
            upgraded_token: upgraded.to_string(),
        },
        &[],
    )
}

fn mint_deprecated(env: &mut TestEnv, recipient: &Addr, amount: Uint128) {
    env.app
        .execute_contract(
            env.minter.clone(),
            env.deprecated.clone(),
            &mintable_token::msg::ExecuteMsg::Mint {
                recipient: recipient.to_string(),
                amount,
            },
            &[],
        )
        .unwrap();
}

fn approve(env: &mut TestEnv, holder: &Addr, token: &Addr, amount: Uint128) {
    env.app
        .execute_contract(
            holder.clone(),
            token.clone(),
            &cw20::Cw20ExecuteMsg::IncreaseAllowance {
                spender: env.migrator.to_string(),
                amount,
                expires: None,
            },
            &[],
        )
        .unwrap();
}

fn migrate(
    env: &mut TestEnv,
    holder: &Addr,
    deprecated: &Addr,
    amount: Uint128,
) -> anyhow::Result<AppResponse> {
    env.app.execute_contract(
        holder.clone(),
        env.migrator.clone(),
        &ExecuteMsg::MigrateTokens {
            deprecated_token: deprecated.to_string(),
            amount,
        },
        &[],
    )
}

fn balance(env: &TestEnv, token: &Addr, address: &Addr) -> Uint128 {
    let res: cw20::BalanceResponse = env
        .app
        .wrap()
        .query_wasm_smart(
            token,
            &cw20::Cw20QueryMsg::Balance {
                address: address.to_string(),
            },
        )
        .unwrap();
    res.balance
}

fn total_supply(env: &TestEnv, token: &Addr) -> Uint128 {
    let res: cw20::TokenInfoResponse = env
        .app
        .wrap()
        .query_wasm_smart(token, &cw20::Cw20QueryMsg::TokenInfo {})
        .unwrap();
    res.total_supply
}

fn allowance(env: &TestEnv, token: &Addr, owner: &Addr) -> Uint128 {
    let res: cw20::AllowanceResponse = env
        .app
        .wrap()
        .query_wasm_smart(
            token,
            &cw20::Cw20QueryMsg::Allowance {
                owner: owner.to_string(),
                spender: env.migrator.to_string(),
            },
        )
        .unwrap();
    res.allowance
}

fn migrated_total(env: &TestEnv, deprecated: &Addr) -> Uint128 {
    let res: MigratedTotalResponse = env
        .app
        .wrap()
        .query_wasm_smart(
            &env.migrator,
            &QueryMsg::MigratedTotal {
                deprecated_token: deprecated.to_string(),
            },
        )
        .unwrap();
    res.amount
}

fn attribute(res: &AppResponse, key: &str) -> Option<String> {
    res.events
        .iter()
        .flat_map(|e| &e.attributes)
        .find(|a| a.key == key)
        .map(|a| a.value.clone())
}

fn assert_err_contains(res: anyhow::Result<AppResponse>, expected: &str) {
    let err = res.unwrap_err();
    assert!(
        err.root_cause().to_string().contains(expected),
        "Expected {} error, got: {}",
        expected,
        err.root_cause()
    );
}

// ============================================================================
// Full Migration Tests
// ============================================================================

#[test]
fn test_full_migration() {
    let mut env = setup();
    let user = env.user.clone();
    let (deprecated, upgraded) = (env.deprecated.clone(), env.upgraded.clone());

    mint_deprecated(&mut env, &user, one_token());
    approve(&mut env, &user, &deprecated, one_token());

    let res = migrate(&mut env, &user, &deprecated, one_token()).unwrap();
    assert_eq!(attribute(&res, "action").unwrap(), "migrate_tokens");
    assert_eq!(attribute(&res, "holder").unwrap(), user.to_string());
    assert_eq!(attribute(&res, "upgraded_token").unwrap(), upgraded.to_string());
    assert_eq!(attribute(&res, "amount").unwrap(), one_token().to_string());

    assert_eq!(balance(&env, &deprecated, &user), Uint128::zero());
    assert_eq!(balance(&env, &upgraded, &user), one_token());
    assert_eq!(total_supply(&env, &deprecated), Uint128::zero());
    assert_eq!(total_supply(&env, &upgraded), one_token());
    assert_eq!(allowance(&env, &deprecated, &user), Uint128::zero());
    assert_eq!(migrated_total(&env, &deprecated), one_token());

    // Migrator never holds either token
    let migrator = env.migrator.clone();
    assert_eq!(balance(&env, &deprecated, &migrator), Uint128::zero());
    assert_eq!(balance(&env, &upgraded, &migrator), Uint128::zero());
}

#[test]
fn test_second_full_migration_fails_insufficient_balance() {
    let mut env = setup();
    let user = env.user.clone();
    let deprecated = env.deprecated.clone();

    mint_deprecated(&mut env, &user, one_token());
    approve(&mut env, &user, &deprecated, one_token());
    migrate(&mut env, &user, &deprecated, one_token()).unwrap();

    assert_err_contains(
        migrate(&mut env, &user, &deprecated, one_token()),
        "Insufficient balance",
    );
}

#[test]
fn test_partial_migrations_sum_to_full_balance() {
    let mut env = setup();
    let user = env.user.clone();
    let (deprecated, upgraded) = (env.deprecated.clone(), env.upgraded.clone());

    mint_deprecated(&mut env, &user, one_token());
    approve(&mut env, &user, &deprecated, one_token());

    migrate(&mut env, &user, &deprecated, half_token()).unwrap();
    assert_eq!(balance(&env, &deprecated, &user), half_token());
    assert_eq!(balance(&env, &upgraded, &user), half_token());

    migrate(&mut env, &user, &deprecated, half_token()).unwrap();
    assert_eq!(balance(&env, &deprecated, &user), Uint128::zero());
    assert_eq!(balance(&env, &upgraded, &user), one_token());
    assert_eq!(migrated_total(&env, &deprecated), one_token());

    assert!(migrate(&mut env, &user, &deprecated, Uint128::one()).is_err());
    assert_eq!(balance(&env, &upgraded, &user), one_token());
}

#[test]
fn test_migrations_are_per_holder() {
    let mut env = setup();
    let user = env.user.clone();
    let other = Addr::unchecked("terra1other");
    let (deprecated, upgraded) = (env.deprecated.clone(), env.upgraded.clone());

    mint_deprecated(&mut env, &user, one_token());
    mint_deprecated(&mut env, &other, one_token());
    approve(&mut env, &user, &deprecated, one_token());
    approve(&mut env, &other, &deprecated, half_token());

    migrate(&mut env, &user, &deprecated, one_token()).unwrap();
    migrate(&mut env, &other, &deprecated, half_token()).unwrap();

    assert_eq!(balance(&env, &upgraded, &user), one_token());
    assert_eq!(balance(&env, &upgraded, &other), half_token());
    assert_eq!(balance(&env, &deprecated, &other), half_token());
    assert_eq!(migrated_total(&env, &deprecated), one_token() + half_token());
    assert_eq!(total_supply(&env, &upgraded), one_token() + half_token());
}

// ============================================================================
// Rejected Migration Tests
// ============================================================================

#[test]
fn test_migration_exceeding_allowance_rejected() {
    let mut env = setup();
    let user = env.user.clone();
    let (deprecated, upgraded) = (env.deprecated.clone(), env.upgraded.clone());

    mint_deprecated(&mut env, &user, one_token());
    approve(&mut env, &user, &deprecated, half_token());

    assert_err_contains(
        migrate(&mut env, &user, &deprecated, one_token()),
        "Insufficient allowance",
    );

    assert_eq!(balance(&env, &deprecated, &user), one_token());
    assert_eq!(balance(&env, &upgraded, &user), Uint128::zero());
    assert_eq!(allowance(&env, &deprecated, &user), half_token());
    assert_eq!(migrated_total(&env, &deprecated), Uint128::zero());
}

#[test]
fn test_migration_without_approval_rejected() {
    let mut env = setup();
    let user = env.user.clone();
    let deprecated = env.deprecated.clone();

    mint_deprecated(&mut env, &user, one_token());

    assert_err_contains(
        migrate(&mut env, &user, &deprecated, one_token()),
        "Insufficient allowance",
    );
}

#[test]
fn test_migration_with_expired_approval_rejected() {
    let mut env = setup();
    let user = env.user.clone();
    let deprecated = env.deprecated.clone();

    mint_deprecated(&mut env, &user, one_token());
    let expires_at = env.app.block_info().height + 1;
    env.app
        .execute_contract(
            user.clone(),
            deprecated.clone(),
            &cw20::Cw20ExecuteMsg::IncreaseAllowance {
                spender: env.migrator.to_string(),
                amount: one_token(),
                expires: Some(Expiration::AtHeight(expires_at)),
            },
            &[],
        )
        .unwrap();
    env.app.update_block(|block| block.height += 1);

    assert_err_contains(
        migrate(&mut env, &user, &deprecated, one_token()),
        "Insufficient allowance",
    );
    assert_eq!(balance(&env, &deprecated, &user), one_token());
}

#[test]
fn test_migration_zero_amount_rejected() {
    let mut env = setup();
    let user = env.user.clone();
    let deprecated = env.deprecated.clone();

    mint_deprecated(&mut env, &user, one_token());
    approve(&mut env, &user, &deprecated, one_token());

    assert_err_contains(
        migrate(&mut env, &user, &deprecated, Uint128::zero()),
        "Invalid zero amount",
    );
}

#[test]
fn test_migration_of_upgraded_token_rejected() {
    let mut env = setup();
    let user = env.user.clone();
    let upgraded = env.upgraded.clone();

    // Lookup is directional: the upgraded side is not a migration source
    assert_err_contains(
        migrate(&mut env, &user, &upgraded, one_token()),
        "Token not registered",
    );
}

#[test]
fn test_migration_of_unregistered_token_rejected() {
    let mut env = setup_unpaired();
    let user = env.user.clone();
    let deprecated = env.deprecated.clone();

    mint_deprecated(&mut env, &user, one_token());
    approve(&mut env, &user, &deprecated, one_token());

    assert_err_contains(
        migrate(&mut env, &user, &deprecated, one_token()),
        "Token not registered",
    );
    assert_eq!(balance(&env, &deprecated, &user), one_token());
}

#[test]
fn test_migration_reverts_when_migrator_is_not_a_bridge() {
    let mut env = setup_unpaired();
    let admin = env.admin.clone();
    let user = env.user.clone();
    let (deprecated, upgraded) = (env.deprecated.clone(), env.upgraded.clone());

    upgrade_token(&mut env, &admin, &deprecated, &upgraded).unwrap();
    mint_deprecated(&mut env, &user, one_token());
    approve(&mut env, &user, &deprecated, one_token());

    // Burn would succeed on its own; the refused mint rolls it back
    assert_err_contains(
        migrate(&mut env, &user, &deprecated, one_token()),
        "Unauthorized",
    );

    assert_eq!(balance(&env, &deprecated, &user), one_token());
    assert_eq!(total_supply(&env, &deprecated), one_token());
    assert_eq!(allowance(&env, &deprecated, &user), one_token());
    assert_eq!(balance(&env, &upgraded, &user), Uint128::zero());
    assert_eq!(migrated_total(&env, &deprecated), Uint128::zero());
}

#[test]
fn test_migration_before_initialize_rejected() {
    let mut app = App::default();
    let user = Addr::unchecked("terra1user");
    let code_id = app.store_code(contract_migrator());
    let migrator = app
        .instantiate_contract(
            code_id,
            user.clone(),
            &InstantiateMsg { owner: None },
            &[],
            "token-migrator",
            None,
        )
        .unwrap();

    let res = app.execute_contract(
        user,
        migrator,
        &ExecuteMsg::MigrateTokens {
            deprecated_token: "terra1deprecated".to_string(),
            amount: one_token(),
        },
        &[],
    );
    assert_err_contains(res, "Migrator not initialized");
}

// ============================================================================
// Legacy cw20 Deprecated Token
// ============================================================================

#[test]
fn test_migration_from_cw20_base_token() {
    let mut env = setup_unpaired();
    let admin = env.admin.clone();
    let user = env.user.clone();
    let migrator = env.migrator.clone();
    let upgraded = env.upgraded.clone();

    let cw20_code_id = env.app.store_code(contract_cw20());
    let legacy = env
        .app
        .instantiate_contract(
            cw20_code_id,
            admin.clone(),
            &cw20_base::msg::InstantiateMsg {
                name: "Legacy Token".to_string(),
                symbol: "LGC".to_string(),
                decimals: 18,
                initial_balances: vec![Cw20Coin {
                    address: user.to_string(),
                    amount: one_token(),
                }],
                mint: None,
                marketing: None,
            },
            &[],
            "cw20-legacy",
            None,
        )
        .unwrap();

    upgrade_token(&mut env, &admin, &legacy, &upgraded).unwrap();
    env.app
        .execute_contract(
            admin,
            upgraded.clone(),
            &mintable_token::msg::ExecuteMsg::AddBridge {
                bridge: migrator.to_string(),
            },
            &[],
        )
        .unwrap();

    approve(&mut env, &user, &legacy, one_token());
    migrate(&mut env, &user, &legacy, half_token()).unwrap();

    assert_eq!(balance(&env, &legacy, &user), half_token());
    assert_eq!(total_supply(&env, &legacy), half_token());
    assert_eq!(balance(&env, &upgraded, &user), half_token());
    assert_eq!(allowance(&env, &legacy, &user), half_token());

    // Upgraded token remains registered to the legacy token only
    let res: TokenAddressResponse = env
        .app
        .wrap()
        .query_wasm_smart(
            &env.migrator,
            &QueryMsg::DeprecatedTokenAddress {
                upgraded_token: upgraded.to_string(),
            },
        )
        .unwrap();
    assert_eq!(res.token, Some(legacy));
}
