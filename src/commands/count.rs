//! Count commands (NUMEQUALTO)

use super::{Command, CommandContext};
use crate::protocol::Reply;
use bytes::Bytes;

/// NUMEQUALTO command - Count the keys currently set to a value
///
/// Syntax: NUMEQUALTO value
pub struct NumEqualToCommand;

impl Command for NumEqualToCommand {
    fn execute(&self, ctx: &mut CommandContext, args: &[Bytes]) -> Reply {
        // Validate argument count
        if args.is_empty() {
            return Reply::error("wrong number of arguments for 'NUMEQUALTO' command");
        }

        Reply::count(ctx.engine.numequalto(&args[0]))
    }

    fn name(&self) -> &'static str {
        "NUMEQUALTO"
    }

    fn min_args(&self) -> usize {
        1
    }

    fn max_args(&self) -> Option<usize> {
        Some(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numequalto() {
        let mut ctx = CommandContext::new();
        ctx.engine.set("a", "10").unwrap();
        ctx.engine.set("b", "10").unwrap();

        let cmd = NumEqualToCommand;

        let args = vec![Bytes::from("10")];
        assert_eq!(cmd.execute(&mut ctx, &args), Reply::count(2));

        let args = vec![Bytes::from("20")];
        assert_eq!(cmd.execute(&mut ctx, &args), Reply::count(0));
    }

    #[test]
    fn test_numequalto_never_stored_value() {
        let mut ctx = CommandContext::new();
        let cmd = NumEqualToCommand;

        let args = vec![Bytes::from("anything")];
        assert_eq!(cmd.execute(&mut ctx, &args), Reply::count(0));
    }
}
