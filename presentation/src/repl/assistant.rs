//! Interactive REPL with converter and ask modes

use crate::config::ReplConfig;
use crate::output::console::ConsoleFormatter;
use crate::output::formatter::OutputFormatter;
use crate::progress::spinner::SpinnerProgress;
use crate::repl::input::{Mode, ReplCommand, parse_conversion};
use colored::Colorize;
use reedline::{DefaultPrompt, DefaultPromptSegment, FileBackedHistory, Reedline, Signal};
use smartconv_application::{
    AskAiUseCase, AskError, AskInput, AskProgressNotifier, ConvertUnitsUseCase, ListUnitsUseCase,
    NoProgress,
};
use smartconv_domain::ModelId;
use tracing::{debug, warn};

const HISTORY_CAPACITY: usize = 1000;

/// What the loop should do after a line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Flow {
    Continue(Option<String>),
    Exit,
}

/// Interactive converter / assistant
pub struct AssistantRepl {
    convert: ConvertUnitsUseCase,
    ask: AskAiUseCase,
    list: ListUnitsUseCase,
    formatter: Box<dyn OutputFormatter>,
    config: ReplConfig,
    model: ModelId,
    mode: Mode,
}

impl AssistantRepl {
    pub fn new(
        convert: ConvertUnitsUseCase,
        ask: AskAiUseCase,
        list: ListUnitsUseCase,
        model: ModelId,
    ) -> Self {
        Self {
            convert,
            ask,
            list,
            formatter: Box::new(ConsoleFormatter::default()),
            config: ReplConfig::default(),
            model,
            mode: Mode::default(),
        }
    }

    pub fn with_formatter(mut self, formatter: Box<dyn OutputFormatter>) -> Self {
        self.formatter = formatter;
        self
    }

    pub fn with_config(mut self, config: ReplConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Run until `/quit` or Ctrl-D.
    pub async fn run(&mut self) -> std::io::Result<()> {
        let mut editor = self.editor();
        self.print_welcome();

        loop {
            let prompt = DefaultPrompt::new(
                DefaultPromptSegment::Basic(self.mode.label().to_string()),
                DefaultPromptSegment::Empty,
            );

            match editor.read_line(&prompt)? {
                Signal::Success(line) => match self.process_line(&line).await {
                    Flow::Continue(Some(output)) => println!("{}\n", output),
                    Flow::Continue(None) => {}
                    Flow::Exit => {
                        println!("Bye!");
                        break;
                    }
                },
                Signal::CtrlC => continue,
                Signal::CtrlD => {
                    println!("Bye!");
                    break;
                }
            }
        }

        Ok(())
    }

    fn editor(&self) -> Reedline {
        let editor = Reedline::create();
        let Some(path) = self.config.history_path() else {
            return editor;
        };

        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }

        match FileBackedHistory::with_file(HISTORY_CAPACITY, path.clone()) {
            Ok(history) => {
                debug!("History file: {}", path.display());
                editor.with_history(Box::new(history))
            }
            Err(e) => {
                warn!("History disabled ({}): {}", path.display(), e);
                editor
            }
        }
    }

    /// Handle one input line and return what to print.
    pub async fn process_line(&mut self, line: &str) -> Flow {
        let line = line.trim();

        if let Some(command) = ReplCommand::parse(line) {
            return self.handle_command(command).await;
        }

        let output = match self.mode {
            Mode::Converter => self.convert_line(line),
            Mode::Ask => self.ask_line(line).await,
        };
        Flow::Continue(Some(output))
    }

    async fn handle_command(&mut self, command: ReplCommand) -> Flow {
        let output = match command {
            ReplCommand::Quit => return Flow::Exit,
            ReplCommand::Help => Self::help(),
            ReplCommand::Convert(line) => {
                self.mode = Mode::Converter;
                match line {
                    Some(line) => self.convert_line(&line),
                    None => Self::mode_banner(self.mode),
                }
            }
            ReplCommand::Ask(prompt) => {
                self.mode = Mode::Ask;
                match prompt {
                    Some(prompt) => self.ask_line(&prompt).await,
                    None => Self::mode_banner(self.mode),
                }
            }
            ReplCommand::Units(like) => match self.list.execute(like.as_deref()) {
                Ok(units) => self.formatter.units(&units),
                Err(e) => self.formatter.conversion_error(&e),
            },
            ReplCommand::Models => match self.ask.available_models().await {
                Ok(models) => self.formatter.models(&models, &self.model),
                Err(e) => self.formatter.ask_error(&e),
            },
            ReplCommand::Unknown(cmd) => format!(
                "Unknown command: {}\nType /help for available commands",
                cmd
            ),
        };
        Flow::Continue(Some(output))
    }

    fn convert_line(&self, line: &str) -> String {
        match parse_conversion(line) {
            Ok(request) => match self.convert.execute(request) {
                Ok(conversion) => self.formatter.conversion(&conversion),
                Err(e) => self.formatter.conversion_error(&e),
            },
            Err(e) => ConsoleFormatter::warning(&e.to_string()),
        }
    }

    async fn ask_line(&self, prompt: &str) -> String {
        if prompt.trim().is_empty() {
            return self.formatter.ask_error(&AskError::EmptyPrompt);
        }

        let progress: Box<dyn AskProgressNotifier> = if self.config.show_progress {
            Box::new(SpinnerProgress::new())
        } else {
            Box::new(NoProgress)
        };

        match self
            .ask
            .execute_with_progress(AskInput::new(prompt), progress.as_ref())
            .await
        {
            Ok(answer) => self.formatter.answer(&answer),
            Err(e) => self.formatter.ask_error(&e),
        }
    }

    fn mode_banner(mode: Mode) -> String {
        match mode {
            Mode::Converter => format!(
                "{} Enter <value> <from> <to>, e.g. {}",
                "Converter mode.".cyan().bold(),
                "5 km to mi".bold()
            ),
            Mode::Ask => format!(
                "{} Type a question for the model.",
                "Ask mode.".cyan().bold()
            ),
        }
    }

    fn help() -> String {
        [
            "Commands:",
            "  /convert [line]  - Converter mode (or convert one line)",
            "  /ask [question]  - Ask mode (or ask one question)",
            "  /units [expr]    - List units, optionally like <expr>",
            "  /models, /m      - List available models",
            "  /help, /h, /?    - Show this help",
            "  /quit, /exit, /q - Exit",
        ]
        .join("\n")
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│        smartconv - Units & AI Assistant     │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("Model: {}", self.model);
        println!("{}", Self::mode_banner(self.mode));
        println!();
        println!("{}", Self::help());
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use smartconv_application::{
        BehaviorConfig, GatewayError, LlmGateway, LlmSession, ResolveError, UnitDescriptor,
        UnitResolver,
    };
    use smartconv_domain::{BaseDimension, Dimension, Unit};
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    // ==================== Test Mocks ====================

    struct LengthResolver;

    impl UnitResolver for LengthResolver {
        fn resolve(&self, expr: &str) -> Result<Unit, ResolveError> {
            let length = Dimension::base(BaseDimension::Length);
            match expr {
                "m" | "meter" => Ok(Unit::new("meter", 1.0, length)),
                "ft" | "foot" => Ok(Unit::new("foot", 0.3048, length)),
                "kg" => Ok(Unit::new("kilogram", 1.0, Dimension::base(BaseDimension::Mass))),
                other => Err(ResolveError::UnknownUnit(other.to_string())),
            }
        }

        fn catalog(&self) -> Vec<UnitDescriptor> {
            vec![UnitDescriptor {
                name: "meter".to_string(),
                symbol: "m".to_string(),
                dimension: Dimension::base(BaseDimension::Length),
                prefixable: true,
            }]
        }
    }

    struct EchoSession {
        model: ModelId,
    }

    #[async_trait]
    impl LlmSession for EchoSession {
        fn model(&self) -> &ModelId {
            &self.model
        }

        async fn send(&self, content: &str) -> Result<String, GatewayError> {
            Ok(format!("echo: {}", content))
        }
    }

    struct EchoGateway {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl LlmGateway for EchoGateway {
        async fn create_session(
            &self,
            model: &ModelId,
        ) -> Result<Box<dyn LlmSession>, GatewayError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(Box::new(EchoSession {
                model: model.clone(),
            }))
        }

        async fn available_models(&self) -> Result<Vec<ModelId>, GatewayError> {
            Ok(vec![ModelId::Gemini15Flash, ModelId::Gemini25Pro])
        }
    }

    fn repl() -> (AssistantRepl, Arc<EchoGateway>) {
        let resolver: Arc<dyn UnitResolver> = Arc::new(LengthResolver);
        let gateway = Arc::new(EchoGateway {
            calls: AtomicUsize::new(0),
        });
        let repl = AssistantRepl::new(
            ConvertUnitsUseCase::new(resolver.clone()),
            AskAiUseCase::new(gateway.clone(), BehaviorConfig::default()),
            ListUnitsUseCase::new(resolver),
            ModelId::default(),
        )
        .with_config(ReplConfig {
            show_progress: false,
            history_file: None,
        });
        (repl, gateway)
    }

    fn text(flow: Flow) -> String {
        match flow {
            Flow::Continue(Some(text)) => text,
            other => panic!("unexpected flow: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_converter_line() {
        let (mut repl, _) = repl();
        let out = text(repl.process_line("5 meter foot").await);
        assert!(out.contains("5 meter = 16.4042 foot"));
    }

    #[tokio::test]
    async fn test_empty_converter_line_warns() {
        let (mut repl, _) = repl();
        let out = text(repl.process_line("   ").await);
        assert!(out.contains("Please enter valid units."));
    }

    #[tokio::test]
    async fn test_incompatible_units_do_not_exit() {
        let (mut repl, _) = repl();
        let out = text(repl.process_line("1 m kg").await);
        assert!(out.contains("Invalid conversion"));
        assert_eq!(repl.mode(), Mode::Converter);
    }

    #[tokio::test]
    async fn test_switch_to_ask_mode() {
        let (mut repl, gateway) = repl();
        text(repl.process_line("/ask").await);
        assert_eq!(repl.mode(), Mode::Ask);

        let out = text(repl.process_line("what is a parsec?").await);
        assert!(out.contains("echo: what is a parsec?"));
        assert_eq!(gateway.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_empty_question_never_reaches_gateway() {
        let (mut repl, gateway) = repl();
        text(repl.process_line("/ask").await);
        let out = text(repl.process_line("").await);
        assert!(out.contains("Please enter a question."));
        assert_eq!(gateway.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_inline_convert_switches_back() {
        let (repl, _) = repl();
        let mut repl = repl.with_mode(Mode::Ask);
        let out = text(repl.process_line("/convert 2 m ft").await);
        assert!(out.contains("2 meter"));
        assert_eq!(repl.mode(), Mode::Converter);
    }

    #[tokio::test]
    async fn test_units_and_quit() {
        let (mut repl, _) = repl();
        let out = text(repl.process_line("/units").await);
        assert!(out.contains("meter"));
        assert_eq!(repl.process_line("/quit").await, Flow::Exit);
    }

    #[tokio::test]
    async fn test_models_command() {
        let (mut repl, gateway) = repl();
        let out = text(repl.process_line("/models").await);
        assert!(out.contains("gemini-2.5-pro"));
        assert_eq!(out.matches("(current)").count(), 1);
        assert_eq!(gateway.calls.load(Ordering::SeqCst), 0);
        assert_eq!(repl.mode(), Mode::Converter);
    }

    #[tokio::test]
    async fn test_unknown_command() {
        let (mut repl, _) = repl();
        let out = text(repl.process_line("/nope").await);
        assert!(out.contains("Unknown command: /nope"));
    }
}
