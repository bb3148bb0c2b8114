// 🤖 Airport Robot - Greeting dispatch by language

/// A language the robot can greet in
pub trait Greeter {
    fn language_name(&self) -> &str;
    fn greet(&self, name: &str) -> String;
}

pub fn say_hello(name: &str, greeter: &dyn Greeter) -> String {
    format!("I can speak {}: {}", greeter.language_name(), greeter.greet(name))
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Italian;

impl Greeter for Italian {
    fn language_name(&self) -> &str {
        "Italian"
    }

    fn greet(&self, name: &str) -> String {
        format!("Ciao {}!", name)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Portuguese;

impl Greeter for Portuguese {
    fn language_name(&self) -> &str {
        "Portuguese"
    }

    fn greet(&self, name: &str) -> String {
        format!("Olá {}!", name)
    }
}
