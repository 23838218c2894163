use std::future::Future;

use serde::Serialize;

use crate::catalog::MutationReceipt;
use crate::forms::schema::{FieldErrors, FormSchema, RawForm, Record};

/// Terminal states of one form submission.
///
/// Unvalidated input either becomes a validated record or is rejected with
/// field errors; a validated record is committed by the mutation or fails
/// without any partial write.
#[derive(Debug, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SubmitOutcome {
    Committed { id: String, redirect_to: String },
    Rejected { errors: FieldErrors },
    Failed { error: String },
}

/// Run the validated-submission railway for one request.
///
/// The mutation closure is invoked at most once, and only with input that
/// passed every field constraint. Remote failures are reported generically;
/// the caller never redirects on failure.
pub async fn submit<F, Fut>(
    schema: &FormSchema,
    raw: &RawForm,
    success_path: &str,
    mutation: F,
) -> SubmitOutcome
where
    F: FnOnce(Record) -> Fut,
    Fut: Future<Output = color_eyre::Result<MutationReceipt>>,
{
    let record = match schema.validate(raw) {
        Ok(record) => record,
        Err(errors) => {
            log::debug!("Submission rejected by validation: {errors:?}");
            return SubmitOutcome::Rejected { errors };
        }
    };

    match mutation(record).await {
        Ok(receipt) => {
            log::info!("Submission committed, remote id: {}", receipt.id);
            SubmitOutcome::Committed {
                id: receipt.id,
                redirect_to: success_path.to_string(),
            }
        }
        Err(report) => {
            log::error!("Submission mutation failed: {report:?}");
            SubmitOutcome::Failed {
                error: "The change could not be saved".to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::forms::schema::FieldSpec;

    fn schema() -> FormSchema {
        FormSchema::new(vec![
            FieldSpec::text("name", 1, 255),
            FieldSpec::int("year", 1900, 2021),
        ])
    }

    fn form(entries: &[(&str, &str)]) -> RawForm {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[tokio::test]
    async fn test_invalid_input_never_invokes_mutation() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();

        let outcome = submit(
            &schema(),
            &form(&[("name", "X"), ("year", "1899")]),
            "/music",
            move |_record| async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Ok(MutationReceipt { id: "never".into() })
            },
        )
        .await;

        assert_eq!(calls.load(Ordering::SeqCst), 0);
        match outcome {
            SubmitOutcome::Rejected { errors } => {
                assert!(errors.field("year").is_some());
            }
            other => panic!("expected rejection, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_valid_input_invokes_mutation_once_and_redirects() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();

        let outcome = submit(
            &schema(),
            &form(&[("name", "Kind of Blue"), ("year", "1959")]),
            "/music",
            move |record| async move {
                counter.fetch_add(1, Ordering::SeqCst);
                assert_eq!(record.str_field("name").unwrap(), "Kind of Blue");
                Ok(MutationReceipt { id: "alb-1".into() })
            },
        )
        .await;

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        match outcome {
            SubmitOutcome::Committed { id, redirect_to } => {
                assert_eq!(id, "alb-1");
                assert_eq!(redirect_to, "/music");
            }
            other => panic!("expected commit, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_mutation_failure_does_not_redirect() {
        let outcome = submit(
            &schema(),
            &form(&[("name", "X"), ("year", "2000")]),
            "/music",
            |_record| async { Err(color_eyre::eyre::eyre!("remote refused the write")) },
        )
        .await;

        assert!(matches!(outcome, SubmitOutcome::Failed { .. }));
    }
}
