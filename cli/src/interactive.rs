use anyhow::{Context, Result};
use inquire::{CustomType, Select};
use webcalc::{Call, Function};

pub fn run_interactive() -> Result<Call> {
    let function = select_function()?;
    let args = prompt_args(function)?;

    Ok(Call::new(function, &args)?)
}

fn select_function() -> Result<Function> {
    let display_options: Vec<String> = Function::ALL.iter().map(|f| f.signature()).collect();

    let selected = Select::new("Select a function:", display_options.clone())
        .with_help_message("Use arrow keys to navigate, Enter to select")
        .prompt()
        .context("Failed to get function selection")?;

    let index = display_options
        .iter()
        .position(|option| option == &selected)
        .context("Failed to find selected function index")?;

    Ok(Function::ALL[index])
}

fn prompt_args(function: Function) -> Result<Vec<i64>> {
    let mut args = Vec::with_capacity(function.arity());

    for param in function.params() {
        let prompt_message = format!("{} =", param);
        let value = CustomType::<i32>::new(&prompt_message)
            .with_error_message("Please enter a 32-bit integer")
            .with_help_message("Negative values are allowed")
            .prompt()
            .with_context(|| format!("Failed to read argument '{}'", param))?;
        args.push(i64::from(value));
    }

    Ok(args)
}
