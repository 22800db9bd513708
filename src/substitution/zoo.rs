use crate::console::Console;

pub trait Animal {
    fn speak(&self) -> &str;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Dog;

impl Animal for Dog {
    fn speak(&self) -> &str {
        "Woof!"
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Cat;

impl Animal for Cat {
    fn speak(&self) -> &str {
        "Meow!"
    }
}

#[derive(Default)]
pub struct Zoo {
    animals: Vec<Box<dyn Animal>>,
}

impl Zoo {
    pub fn new(animals: Vec<Box<dyn Animal>>) -> Self {
        Self { animals }
    }

    pub fn admit(&mut self, animal: Box<dyn Animal>) {
        self.animals.push(animal);
    }

    pub fn sounds(&self) -> Vec<&str> {
        self.animals.iter().map(|animal| animal.speak()).collect()
    }

    pub fn make_noise(&self, console: &dyn Console) {
        for animal in &self.animals {
            console.print_line(animal.speak());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::Transcript;

    struct Parrot {
        phrase: String,
    }

    impl Animal for Parrot {
        fn speak(&self) -> &str {
            &self.phrase
        }
    }

    #[test]
    fn test_fixed_sounds() {
        assert_eq!(Dog.speak(), "Woof!");
        assert_eq!(Cat.speak(), "Meow!");
    }

    #[test]
    fn test_make_noise_in_admission_order() {
        let mut zoo = Zoo::new(vec![Box::new(Dog), Box::new(Cat)]);
        zoo.admit(Box::new(Parrot {
            phrase: "Hello!".to_string(),
        }));

        let transcript = Transcript::new();
        zoo.make_noise(&transcript);

        assert_eq!(transcript.lines(), vec!["Woof!", "Meow!", "Hello!"]);
        assert_eq!(zoo.sounds(), vec!["Woof!", "Meow!", "Hello!"]);
    }

    #[test]
    fn test_empty_zoo_is_silent() {
        let transcript = Transcript::new();
        Zoo::default().make_noise(&transcript);
        assert!(transcript.is_empty());
    }
}
