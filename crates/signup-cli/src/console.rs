use colored::Colorize;
use signup_form::{Field, FieldErrorMap, Navigator, Notice, NoticeKind, Notifier};
use std::io::Write;

/// Prints notices as alert boxes on stdout
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, notice: Notice) {
        let title = match notice.kind {
            NoticeKind::Success => notice.title.green().bold(),
            NoticeKind::Error => notice.title.red().bold(),
        };
        println!();
        println!("  {}", title);
        println!("  {}", notice.description);
        println!();
    }
}

pub struct ConsoleNavigator;

impl Navigator for ConsoleNavigator {
    fn go_back(&self) {
        println!("{}", "← Voltar para logon".dimmed());
    }

    fn return_to_sign_in(&self) {
        println!("{}", "→ logon".dimmed());
    }
}

pub fn label(field: Field) -> &'static str {
    match field {
        Field::Name => "Nome",
        Field::Email => "E-mail",
        Field::Password => "Senha",
    }
}

pub fn prompt(field: Field) {
    print!("{} ", format!("{}:", label(field)).cyan());
    // a failed flush only delays the prompt text
    let _ = std::io::stdout().flush();
}

pub fn print_errors(errors: &FieldErrorMap) {
    for (field, message) in errors {
        println!("  {} {}", format!("{}:", label(*field)).yellow(), message.red());
    }
}
