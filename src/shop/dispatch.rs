use super::CommandExecutor;
use crate::catalog::CommandItem;
use crate::core::Requester;
use crate::template::{self, TemplateContext};
use log::warn;

/// Renders and executes an item's action templates through the external
/// executor.
pub struct CommandDispatcher<'a> {
    executor: &'a dyn CommandExecutor,
}

impl<'a> CommandDispatcher<'a> {
    pub fn new(executor: &'a dyn CommandExecutor) -> Self {
        Self { executor }
    }

    /// Execute every template in catalog order, continuing past individual
    /// failures. Returns `true` if any command failed.
    ///
    /// The aggregate boolean is all the caller gets; which command failed
    /// is only visible in the log.
    pub fn dispatch_all(&self, item: &CommandItem, requester: &Requester) -> bool {
        let ctx = TemplateContext {
            requester,
            item_name: &item.name,
        };

        let mut any_failed = false;
        for action in &item.commands_to_execute {
            let command = template::render(action, &ctx);
            if !self.executor.execute(requester, &command) {
                warn!("Command failed for item '{}': {}", item.name, command);
                any_failed = true;
            }
        }
        any_failed
    }
}
