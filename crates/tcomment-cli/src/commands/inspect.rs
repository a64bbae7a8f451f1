//! Inspect command implementation.

use anyhow::Result;

use tcomment_ops::{InspectRequest, OpsContext, ThrowsMode};

/// Execute the inspect command on one comment.
pub fn execute(
    ctx: &OpsContext,
    comment: String,
    parameters: Vec<String>,
    param: Option<String>,
    mode: Option<ThrowsMode>,
    json: bool,
) -> Result<()> {
    let mut request = InspectRequest::new(comment).with_parameters(parameters);
    if let Some(param) = param {
        if !request.parameters.contains(&param) {
            anyhow::bail!(
                "Parameter '{}' is not among the declared parameters: [{}]",
                param,
                request.parameters.join(", ")
            );
        }
        request = request.for_parameter(param);
    }
    if let Some(mode) = mode {
        request = request.with_throws_mode(mode);
    }

    let response = ctx.inspect(request);

    if json {
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    println!("Words:      {:?}", response.words);
    println!("Not null:   {}", response.not_null);
    if let Some(precondition) = &response.precondition {
        println!("@param:     {}", precondition);
    }
    println!(
        "@throws:    {}",
        if response.throws_condition.is_empty() {
            "(none)"
        } else {
            &response.throws_condition
        }
    );

    Ok(())
}
