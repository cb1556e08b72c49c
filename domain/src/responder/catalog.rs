//! Built-in JavaScript tutor content
//!
//! Rule order matters: a message containing both "hello" and "function" is a
//! greeting, because the greeting rule is checked first.

use super::rule::{Rule, RuleSet};

pub const GREETING_RESPONSE: &str = "👋 Hello! I'm your JavaScript Tutor. I can help you learn variables, functions, arrays, objects, promises, and much more! What would you like to learn about?";

pub const VARIABLES_RESPONSE: &str = r#"# JavaScript Variables

**Three ways to declare variables:**

```javascript
// const - cannot be reassigned
const name = "John";

// let - can be reassigned
let age = 25;
age = 26; // This works!

// var - avoid in modern code (function scoped)
var old = "don't use this";
```

💡 **Best Practice**: Use `const` by default, `let` when you need to reassign."#;

pub const FUNCTIONS_RESPONSE: &str = r#"# JavaScript Functions

**Different ways to write functions:**

```javascript
// Function declaration
function greet(name) {
    return "Hello " + name;
}

// Function expression
const greet = function(name) {
    return "Hello " + name;
};

// Arrow function (ES6+)
const greet = (name) => "Hello " + name;

// Calling functions
console.log(greet("John")); // "Hello John"
```"#;

pub const ARRAYS_RESPONSE: &str = r#"# JavaScript Arrays

**Common array methods:**

```javascript
const numbers = [1, 2, 3, 4, 5];

// Transform each element
const doubled = numbers.map(x => x * 2); // [2, 4, 6, 8, 10]

// Filter elements
const evens = numbers.filter(x => x % 2 === 0); // [2, 4]

// Calculate sum
const sum = numbers.reduce((acc, curr) => acc + curr, 0); // 15

// Find element
const firstEven = numbers.find(x => x % 2 === 0); // 2
```"#;

pub const HELP_RESPONSE: &str = r#"# How I Can Help You Learn JavaScript

I can explain:

📚 **Basics**: variables, functions, loops, conditionals
🎯 **Core Concepts**: arrays, objects, ES6 features
⏳ **Advanced**: promises, async/await, closures
🌐 **Web**: DOM manipulation, events, APIs

**Try asking:**
• "Explain variables"
• "How do functions work?"
• "Show me array examples"
• "What are promises?"
• "JavaScript quiz""#;

pub const QUIZ_RESPONSE: &str = r#"🎯 **JavaScript Quiz**

**What will this code output?**

```javascript
console.log(typeof []);
```

A) array
B) object
C) undefined
D) null

💡 Think about it, then ask me for the answer!"#;

pub const TOPICS_RESPONSE: &str = r#"I'm your JavaScript Tutor! I can help you learn:

• **Variables** (let, const, var)
• **Functions** (declarations, expressions, arrow)
• **Arrays** and array methods
• **Objects** and object manipulation
• **Promises** and async/await
• **DOM** manipulation
• And much more!

Try asking: "explain variables" or "show me array examples""#;

/// Shown by chat surfaces on start and after the conversation is cleared
pub const WELCOME_MESSAGE: &str = r#"👋 **Hello! I'm your JavaScript Tutor.**

I can help you learn:
• **Variables** (let, const, var)
• **Functions** and arrow functions
• **Arrays** and array methods
• **Objects** and destructuring
• **Promises** and async/await
• And much more!

**Try asking:**
• "Explain variables"
• "How do functions work?"
• "Show me array examples"
• "JavaScript quiz""#;

impl RuleSet {
    /// The tutor's fixed rule list, in dispatch order
    pub fn javascript_tutor() -> Self {
        Self::from_parts(
            vec![
                Rule::new(
                    "greeting",
                    &["hello", "hi", "hey", "start"],
                    GREETING_RESPONSE,
                ),
                Rule::new(
                    "variables",
                    &["variable", "let", "const"],
                    VARIABLES_RESPONSE,
                ),
                Rule::new("functions", &["function"], FUNCTIONS_RESPONSE),
                Rule::new("arrays", &["array"], ARRAYS_RESPONSE),
                Rule::new("help", &["help"], HELP_RESPONSE),
                Rule::new("quiz", &["quiz"], QUIZ_RESPONSE),
            ],
            TOPICS_RESPONSE.to_string(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_order() {
        let set = RuleSet::javascript_tutor();
        let names: Vec<_> = set.rules().iter().map(|r| r.name()).collect();
        assert_eq!(
            names,
            ["greeting", "variables", "functions", "arrays", "help", "quiz"]
        );
    }

    #[test]
    fn test_builtin_set_passes_validation() {
        let set = RuleSet::javascript_tutor();
        let rebuilt = RuleSet::new(set.rules().to_vec(), set.fallback()).unwrap();
        assert_eq!(rebuilt, set);
    }

    #[test]
    fn test_variables_text_names_all_declarations() {
        for keyword in ["const", "let", "var"] {
            assert!(VARIABLES_RESPONSE.contains(keyword));
        }
        assert!(VARIABLES_RESPONSE.contains("Three ways to declare variables"));
    }
}
