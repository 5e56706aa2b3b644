//! Diagnostic replay of failed contract calls
//!
//! When a user's transaction fails, the front end can replay the same
//! call from a throwaway account to capture the revert reason. The
//! throwaway key holds no funds and is never used to send anything: the
//! replay is an `eth_call`.
//!
//! The replay runs on a spawned tokio task. The returned handle resolves
//! to a [`RevertReport`]; callers that do not care about the outcome may
//! drop it and rely on the log output.

use alloy::{
    contract::{ContractInstance, Interface},
    dyn_abi::DynSolValue,
    network::Ethereum,
    primitives::{b256, Address, Bytes, B256},
    providers::{Provider, ProviderBuilder},
    rpc::types::TransactionRequest,
    signers::local::PrivateKeySigner,
};
use tokio::{runtime::Handle, task::JoinHandle};

use crate::{
    errors::HelperError,
    types::{CallOverrides, RevertReport},
    utils::error_utils::decode_revert_reason,
};

/// Publicly known throwaway key. Must never hold funds.
const DIAGNOSTIC_PRIVATE_KEY: B256 =
    b256!("651bd555534625dc2fd85e13369dc61547b2e3f2cfc8b98cee868b449c17a4d6");

/// Signer for diagnostic replays only
///
/// Not a production signing path: the key is hard-coded and public.
pub fn diagnostic_signer() -> Result<PrivateKeySigner, HelperError> {
    PrivateKeySigner::from_bytes(&DIAGNOSTIC_PRIVATE_KEY)
        .map_err(|e| HelperError::Signer(e.to_string()))
}

/// Build the `eth_call` request for a replay
///
/// The throwaway account holds no funds, so a gas price or value would make
/// the node reject the call for insufficient funds before any contract code
/// runs. Only the gas limit is carried over.
fn replay_request(
    from: Address,
    to: Address,
    calldata: Bytes,
    overrides: &CallOverrides,
) -> TransactionRequest {
    let tx = TransactionRequest::default()
        .from(from)
        .to(to)
        .input(calldata.into());
    match overrides.gas_limit {
        Some(gas_limit) => tx.gas_limit(gas_limit),
        None => tx,
    }
}

/// Replay a failed contract call to log its revert reason
///
/// # Arguments
/// * `sender` - Account whose transaction failed, recorded in the report
/// * `contract` - Contract handle; its address, ABI and provider are reused
/// * `action` - Method name to replay
/// * `params` - Method arguments
/// * `overrides` - Original call overrides; only the gas limit is replayed
///
/// # Returns
/// * `Ok(JoinHandle<RevertReport>)` - The replay is in flight
/// * `Err(HelperError)` - The call could not be encoded, or no runtime is running
///
/// `overrides` is read, never modified.
pub fn log_reverted_tx<P>(
    sender: &str,
    contract: &ContractInstance<P, Ethereum>,
    action: &str,
    params: &[DynSolValue],
    overrides: &CallOverrides,
) -> Result<JoinHandle<RevertReport>, HelperError>
where
    P: Provider<Ethereum> + Clone + 'static,
{
    let runtime = Handle::try_current().map_err(|e| HelperError::Runtime(e.to_string()))?;

    let calldata = Interface::new(contract.abi().clone())
        .encode_input(action, params)
        .map_err(|e| HelperError::Abi(format!("{}: {}", action, e)))?;

    let from = diagnostic_signer()?.address();
    let provider = contract.provider().clone();
    let tx = replay_request(from, *contract.address(), calldata.into(), overrides);

    let mut report = RevertReport {
        sender: sender.to_string(),
        contract: *contract.address(),
        action: action.to_string(),
        overrides: overrides.clone(),
        reason: None,
        raw: None,
    };

    Ok(runtime.spawn(async move {
        match provider.call(tx).await {
            Ok(_) => {
                log::debug!(
                    "Replay of {} on {} for {} did not revert",
                    report.action,
                    report.contract,
                    report.sender
                );
            }
            Err(err) => {
                report.raw = err.as_error_resp().and_then(|payload| payload.as_revert_data());
                report.reason = report.raw.as_ref().and_then(|raw| decode_revert_reason(raw));
                match (&report.reason, &report.raw) {
                    (Some(reason), _) => log::warn!(
                        "Reverted {} on {} for {} (overrides {:?}): {}",
                        report.action,
                        report.contract,
                        report.sender,
                        report.overrides,
                        reason
                    ),
                    (None, Some(raw)) => log::warn!(
                        "Reverted {} on {} for {} with undecoded data {}",
                        report.action,
                        report.contract,
                        report.sender,
                        raw
                    ),
                    (None, None) => log::debug!(
                        "Replay of {} on {} for {} failed without revert data: {}",
                        report.action,
                        report.contract,
                        report.sender,
                        err
                    ),
                }
            }
        }
        report
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::{
        json_abi::JsonAbi,
        primitives::{address, U256},
        rpc::json_rpc::ErrorPayload,
        sol_types::{Revert, SolError},
        transports::mock::Asserter,
    };

    const POOL: Address = address!("6B175474E89094C44Da98b954EedeAC495271d0F");
    const SENDER: &str = "0xC255fC198eEdAC7AF8aF0f6e0ca781794B094A61";

    fn pool_contract(asserter: &Asserter) -> ContractInstance<impl Provider + Clone + 'static, Ethereum> {
        let abi = JsonAbi::parse([
            "function joinPool(uint256 poolAmountOut, uint256[] maxAmountsIn)",
        ])
        .unwrap();
        let provider = ProviderBuilder::new()
            .disable_recommended_fillers()
            .connect_mocked_client(asserter.clone());
        ContractInstance::new(POOL, provider, Interface::new(abi))
    }

    fn join_params() -> Vec<DynSolValue> {
        vec![
            DynSolValue::Uint(U256::from(1000u64), 256),
            DynSolValue::Array(vec![DynSolValue::Uint(U256::from(5u64), 256)]),
        ]
    }

    fn revert_payload(reason: &str) -> ErrorPayload {
        let data = Bytes::from(Revert { reason: reason.to_string() }.abi_encode());
        let payload = serde_json::json!({
            "code": 3,
            "message": format!("execution reverted: {}", reason),
            "data": data.to_string(),
        });
        serde_json::from_str(&payload.to_string()).unwrap()
    }

    #[test]
    fn test_diagnostic_signer_is_stable() {
        let first = diagnostic_signer().unwrap();
        let second = diagnostic_signer().unwrap();
        assert_eq!(first.address(), second.address());
        assert_ne!(first.address(), Address::ZERO);
    }

    #[tokio::test]
    async fn test_replay_captures_revert_reason() {
        let _ = env_logger::builder().is_test(true).try_init();
        let asserter = Asserter::new();
        asserter.push_failure(revert_payload("ERR_LIMIT_IN"));
        let contract = pool_contract(&asserter);

        let overrides = CallOverrides {
            gas_price: Some(1_000_000_000),
            gas_limit: Some(500_000),
            value: None,
        };
        let handle =
            log_reverted_tx(SENDER, &contract, "joinPool", &join_params(), &overrides).unwrap();
        let report = handle.await.unwrap();

        assert!(report.reverted());
        assert_eq!(report.reason.as_deref(), Some("ERR_LIMIT_IN"));
        assert_eq!(report.sender, SENDER);
        assert_eq!(report.contract, POOL);
        assert_eq!(report.action, "joinPool");
        // Overrides are left untouched and recorded as given
        assert_eq!(overrides.gas_price, Some(1_000_000_000));
        assert_eq!(report.overrides, overrides);
    }

    #[test]
    fn test_replay_request_drops_price_and_value() {
        let from = diagnostic_signer().unwrap().address();
        let overrides = CallOverrides {
            gas_price: Some(1_000_000_000),
            gas_limit: Some(500_000),
            value: Some(U256::from(10u64).pow(U256::from(18u64))),
        };
        let tx = replay_request(from, POOL, Bytes::from_static(&[0xde, 0xad]), &overrides);

        assert_eq!(tx.from, Some(from));
        assert_eq!(tx.gas, Some(500_000));
        assert_eq!(tx.gas_price, None);
        assert_eq!(tx.value, None);
        assert_eq!(tx.input.input(), Some(&Bytes::from_static(&[0xde, 0xad])));

        let tx = replay_request(from, POOL, Bytes::new(), &CallOverrides::default());
        assert_eq!(tx.gas, None);
    }

    #[tokio::test]
    async fn test_replay_without_revert() {
        let asserter = Asserter::new();
        asserter.push_success(&Bytes::new());
        let contract = pool_contract(&asserter);

        let report = log_reverted_tx(
            SENDER,
            &contract,
            "joinPool",
            &join_params(),
            &CallOverrides::default(),
        )
        .unwrap()
        .await
        .unwrap();

        assert!(!report.reverted());
        assert_eq!(report.reason, None);
    }

    #[tokio::test]
    async fn test_transport_error_without_revert_data() {
        let asserter = Asserter::new();
        asserter.push_failure_msg("header not found");
        let contract = pool_contract(&asserter);

        let report = log_reverted_tx(
            SENDER,
            &contract,
            "joinPool",
            &join_params(),
            &CallOverrides::default(),
        )
        .unwrap()
        .await
        .unwrap();

        assert!(!report.reverted());
    }

    #[tokio::test]
    async fn test_unknown_action_fails_early() {
        let asserter = Asserter::new();
        let contract = pool_contract(&asserter);

        let result = log_reverted_tx(
            SENDER,
            &contract,
            "exitPool",
            &join_params(),
            &CallOverrides::default(),
        );
        assert!(matches!(result, Err(HelperError::Abi(_))));

        let result = log_reverted_tx(SENDER, &contract, "joinPool", &[], &CallOverrides::default());
        assert!(matches!(result, Err(HelperError::Abi(_))));
    }

    #[test]
    fn test_requires_runtime() {
        let asserter = Asserter::new();
        let contract = pool_contract(&asserter);
        let result = log_reverted_tx(
            SENDER,
            &contract,
            "joinPool",
            &join_params(),
            &CallOverrides::default(),
        );
        assert!(matches!(result, Err(HelperError::Runtime(_))));
    }
}
