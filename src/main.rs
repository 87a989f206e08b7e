use createrel::run;
use miette::{MietteHandlerOpts, Result};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Never wrap, so git output and API responses stay on the diagnostic's line.
    miette::set_hook(Box::new(|_| {
        Box::new(MietteHandlerOpts::new().width(usize::MAX).build())
    }))?;
    run().await
}
