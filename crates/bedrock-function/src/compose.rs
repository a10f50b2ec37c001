// Purpose: Finally-style sequencing shared by the side-effecting capabilities

use bedrock_error::{SoftResult, Throwable};

/// Runs `second` whatever `first` produced.
///
/// The first failure wins. A failure from `second` is then attached to it as
/// suppressed, recorded only if the first failure has suppression enabled.
pub(crate) fn finally<F>(first: SoftResult<()>, second: F) -> SoftResult<()>
where
    F: FnOnce() -> SoftResult<()>,
{
    let second = second();
    match (first, second) {
        (Ok(()), second) => second,
        (Err(first), Ok(())) => Err(first),
        (Err(first), Err(second)) => {
            tracing::warn!(
                primary = first.error_code(),
                secondary = second.error_code(),
                "Second operand failed after the first; keeping the first failure: {}",
                second
            );
            first.attach(second);
            Err(first)
        }
    }
}
