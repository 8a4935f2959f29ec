use super::*;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

struct ScriptedRunner {
    calls: Rc<Cell<usize>>,
    seen: Rc<RefCell<Vec<FetchRequest>>>,
    result: fn() -> io::Result<ProcessOutput>,
}

impl FetchRunner for ScriptedRunner {
    fn run(&self, request: &FetchRequest) -> io::Result<ProcessOutput> {
        self.calls.set(self.calls.get() + 1);
        self.seen.borrow_mut().push(request.clone());
        (self.result)()
    }
}

fn gateway(result: fn() -> io::Result<ProcessOutput>) -> (FetchGateway, Rc<Cell<usize>>, Rc<RefCell<Vec<FetchRequest>>>) {
    let calls = Rc::new(Cell::new(0));
    let seen = Rc::new(RefCell::new(Vec::new()));
    let runner = ScriptedRunner {
        calls: calls.clone(),
        seen: seen.clone(),
        result,
    };
    (FetchGateway::new(Box::new(runner)), calls, seen)
}

fn ok_output() -> io::Result<ProcessOutput> {
    Ok(ProcessOutput {
        stdout: "{\"symbol\": \"AAPL\"}\n".to_string(),
        success: true,
        code: Some(0),
    })
}

#[test]
fn sanitize_drops_disallowed_characters() {
    assert_eq!(sanitize_symbol("AAPL!! 2024"), "AAPL2024");
    assert_eq!(sanitize_symbol("brk.b"), "brk.b");
    assert_eq!(sanitize_symbol("RDS-A_x"), "RDS-A_x");
    assert_eq!(sanitize_symbol("; rm -rf /"), "rm-rf");
    assert_eq!(sanitize_symbol("ÄPPLÉ"), "PPL");
}

#[test]
fn sanitize_is_idempotent() {
    for raw in ["AAPL!! 2024", "", "  ", "$(echo hi)", "a.b-c_d", "日本7203.T", "\t\nX"] {
        let once = sanitize_symbol(raw);
        assert_eq!(sanitize_symbol(&once), once, "raw={raw:?}");
    }
}

#[test]
fn empty_symbol_is_not_a_request() {
    assert_eq!(Symbol::parse("!!! ???"), None);
    assert!(FetchRequest::new("", FetchKind::Quote).is_none());
    let req = FetchRequest::new(" msft ", FetchKind::Options).unwrap();
    assert_eq!(req.symbol.as_str(), "msft");
    assert_eq!(req.kind, FetchKind::Options);
}

#[test]
fn empty_input_never_launches() {
    let (gw, calls, _) = gateway(ok_output);
    assert_eq!(gw.fetch("  !!", FetchKind::Quote), FetchOutcome::EmptyInput);
    assert_eq!(calls.get(), 0);
}

#[test]
fn runner_receives_sanitized_symbol() {
    let (gw, calls, seen) = gateway(ok_output);
    let outcome = gw.fetch("AAPL!! ", FetchKind::Quote);
    assert!(outcome.is_success());
    assert_eq!(calls.get(), 1);
    assert_eq!(seen.borrow()[0].symbol.as_str(), "AAPL");
}

#[test]
fn launch_error_becomes_launch_failure() {
    let (gw, _, _) = gateway(|| Err(io::Error::new(io::ErrorKind::NotFound, "no such program")));
    match gw.fetch("AAPL", FetchKind::Options) {
        FetchOutcome::LaunchFailure(reason) => assert!(reason.contains("no such program")),
        other => panic!("unexpected outcome: {other:?}"),
    }
}

#[test]
fn non_zero_exit_without_output_reports_code() {
    let (gw, _, _) = gateway(|| {
        Ok(ProcessOutput {
            stdout: String::new(),
            success: false,
            code: Some(2),
        })
    });
    assert_eq!(gw.fetch("AAPL", FetchKind::Quote), FetchOutcome::NonZeroExit(Some(2)));
}

#[test]
fn non_zero_exit_with_output_is_partial_success() {
    let (gw, _, _) = gateway(|| {
        Ok(ProcessOutput {
            stdout: "{\"error\": \"no data\"}".to_string(),
            success: false,
            code: Some(2),
        })
    });
    assert_eq!(
        gw.fetch("AAPL", FetchKind::Options),
        FetchOutcome::Success {
            output: "{\"error\": \"no data\"}".to_string(),
            partial: true,
        }
    );
}

#[test]
fn zero_exit_with_empty_output_is_success() {
    let outcome = FetchOutcome::from_output(ProcessOutput {
        stdout: String::new(),
        success: true,
        code: Some(0),
    });
    assert_eq!(outcome.output(), Some(""));
}

#[test]
fn failures_describe_themselves() {
    assert_eq!(
        FetchOutcome::EmptyInput.describe_failure(FetchKind::Quote).unwrap(),
        "No symbol provided"
    );
    assert_eq!(
        FetchOutcome::NonZeroExit(Some(3))
            .describe_failure(FetchKind::Options)
            .unwrap(),
        "options fetch exited with code 3"
    );
    assert_eq!(
        FetchOutcome::TimedOut(Duration::from_millis(1500))
            .describe_failure(FetchKind::Quote)
            .unwrap(),
        "quote fetch timed out after 1.5s"
    );
    assert!(FetchOutcome::Success {
        output: String::new(),
        partial: false
    }
    .describe_failure(FetchKind::Quote)
    .is_none());
}
