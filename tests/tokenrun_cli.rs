#![allow(clippy::unwrap_used, clippy::expect_used)]
use assert_cmd::Command;
use tempfile::TempDir;

const DEPLOYER: &str = "0x1111111111111111111111111111111111111111";
const ALICE: &str = "0x2222222222222222222222222222222222222222";
const BOB: &str = "0x3333333333333333333333333333333333333333";
const ZERO: &str = "0x0000000000000000000000000000000000000000";
const TOTAL: &str = "21000000000000000000000000";

struct Ctx {
    dir: TempDir,
}

impl Ctx {
    fn new() -> Self {
        Ctx {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    fn tokenrun(&self, caller: &str, args: &[&str]) -> assert_cmd::assert::Assert {
        let state_file = self.dir.path().join("state.json");
        Command::cargo_bin("tokenrun")
            .unwrap()
            .current_dir(self.dir.path())
            .env_remove("TOKENRUN_CALLER")
            .env_remove("TOKENRUN_STATE_FILE")
            .arg("--state-file")
            .arg(state_file)
            .arg("--caller")
            .arg(caller)
            .args(args)
            .assert()
    }

    fn stderr_of_failure(&self, caller: &str, args: &[&str]) -> String {
        let output = self.tokenrun(caller, args).failure().get_output().stderr.clone();
        String::from_utf8(output).unwrap()
    }

    fn stdout(&self, caller: &str, args: &[&str]) -> String {
        let output = self.tokenrun(caller, args).success().get_output().stdout.clone();
        String::from_utf8(output).unwrap()
    }
}

#[test]
fn deploy_mints_total_supply() {
    let ctx = Ctx::new();

    let out = ctx.stdout(DEPLOYER, &["deploy"]);
    assert!(out.contains(&format!(
        "event: Transfer(from={ZERO}, to={DEPLOYER}, amount={TOTAL})"
    )));

    assert_eq!(
        ctx.stdout(ALICE, &["balance-of", DEPLOYER]).trim(),
        format!("result: {TOTAL}")
    );
    assert_eq!(
        ctx.stdout(ALICE, &["total-supply"]).trim(),
        format!("result: {TOTAL}")
    );
    assert_eq!(ctx.stdout(ALICE, &["decimals"]).trim(), "result: 18");
    assert_eq!(ctx.stdout(ALICE, &["symbol"]).trim(), "result: FST");
}

#[test]
fn second_deploy_fails_and_keeps_state() {
    let ctx = Ctx::new();
    ctx.stdout(DEPLOYER, &["deploy"]);

    assert!(ctx
        .stderr_of_failure(ALICE, &["deploy"])
        .contains("token supply already initialized"));

    assert_eq!(
        ctx.stdout(ALICE, &["balance-of", ALICE]).trim(),
        "result: 0"
    );
}

#[test]
fn allowance_flow() {
    let ctx = Ctx::new();
    ctx.stdout(DEPLOYER, &["deploy"]);

    let out = ctx.stdout(DEPLOYER, &["approve", ALICE, "100"]);
    assert!(out.contains("result: true"));
    assert!(out.contains(&format!(
        "event: Approval(owner={DEPLOYER}, spender={ALICE}, amount=100) data=0x{}{}{}64",
        "11".repeat(20),
        "22".repeat(20),
        "00".repeat(31)
    )));

    let out = ctx.stdout(ALICE, &["transfer-from", DEPLOYER, BOB, "40"]);
    assert!(out.contains("result: true"));
    assert!(out.contains(&format!(
        "event: Transfer(from={DEPLOYER}, to={BOB}, amount=40)"
    )));

    assert_eq!(
        ctx.stdout(BOB, &["allowance", DEPLOYER, ALICE]).trim(),
        "result: 60"
    );
    assert_eq!(ctx.stdout(BOB, &["balance-of", BOB]).trim(), "result: 40");

    assert!(ctx
        .stderr_of_failure(ALICE, &["transfer-from", DEPLOYER, BOB, "61"])
        .contains("insufficient allowance"));
    assert_eq!(
        ctx.stdout(BOB, &["allowance", DEPLOYER, ALICE]).trim(),
        "result: 60"
    );
}

#[test]
fn transfer_to_zero_address_fails() {
    let ctx = Ctx::new();
    ctx.stdout(DEPLOYER, &["deploy"]);

    assert!(ctx
        .stderr_of_failure(DEPLOYER, &["transfer", ZERO, "1"])
        .contains("zero address"));
}

#[test]
fn zero_caller_cannot_send_or_approve() {
    let ctx = Ctx::new();
    ctx.stdout(DEPLOYER, &["deploy"]);

    assert!(ctx
        .stderr_of_failure(ZERO, &["transfer", ALICE, "0"])
        .contains("zero address"));
    assert!(ctx
        .stderr_of_failure(ZERO, &["approve", ALICE, "5"])
        .contains("zero address"));
    assert_eq!(
        ctx.stdout(ALICE, &["allowance", ZERO, ALICE]).trim(),
        "result: 0"
    );
}

#[test]
fn unknown_log_format_is_rejected() {
    let ctx = Ctx::new();
    assert!(ctx
        .stderr_of_failure(ALICE, &["--log-format", "jsn", "total-supply"])
        .contains("unknown log format \"jsn\""));
}

#[test]
fn raw_call_and_unknown_selector() {
    let ctx = Ctx::new();
    ctx.stdout(DEPLOYER, &["deploy"]);

    let out = ctx.stdout(ALICE, &["raw", "0x313ce567"]);
    assert_eq!(out.trim(), "result: 0x12");

    assert!(ctx
        .stderr_of_failure(ALICE, &["raw", "0xdeadbeef"])
        .contains("unknown selector 0xdeadbeef"));
}

#[test]
fn selector_command() {
    let ctx = Ctx::new();
    assert_eq!(
        ctx.stdout(ALICE, &["selector", "transfer(address,uint256)"]).trim(),
        "0xa9059cbb"
    );
}
