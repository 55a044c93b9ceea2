use multiprompt::{Prompt, PromptConfig, PromptEvent, Suggestion};
use std::cell::RefCell;
use std::rc::Rc;

/// Inputs handed to the executor, in call order.
pub type Executed = Rc<RefCell<Vec<String>>>;

/// Build a SQL-flavoured `Prompt` whose executor records what it ran.
/// Suggestions come from a small fixed keyword list.
pub fn test_prompt() -> (Prompt, Executed) {
    test_prompt_with(|config| config)
}

/// Like `test_prompt`, with a hook to adjust the config before construction.
pub fn test_prompt_with(adjust: impl FnOnce(PromptConfig) -> PromptConfig) -> (Prompt, Executed) {
    let executed: Executed = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&executed);
    let config = PromptConfig::new("sql> ", "  -> ")
        .with_completer(|_, fragment| {
            ["FROM", "FORMAT", "SELECT", "SET"]
                .iter()
                .filter(|kw| kw.starts_with(&fragment.to_uppercase()))
                .map(|kw| Suggestion::plain(*kw))
                .collect()
        })
        .with_executor(move |input| {
            sink.borrow_mut().push(input.to_owned());
            format!("ok: {input}")
        });
    (Prompt::new(adjust(config)), executed)
}

/// Helper: send each char of `text` as its own insert event.
pub fn type_text(prompt: &mut Prompt, text: &str) {
    for c in text.chars() {
        prompt.handle(PromptEvent::Insert(c.to_string()));
    }
}

/// Helper: send a sequence of events.
pub fn send(prompt: &mut Prompt, events: &[PromptEvent]) {
    for event in events {
        prompt.handle(event.clone());
    }
}

pub fn lines(prompt: &Prompt) -> Vec<String> {
    prompt.input().lines().to_vec()
}
