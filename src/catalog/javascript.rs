//! JavaScript reference chapters.
//!
//! Fixed data, one topic per chapter. Expand by registering more tables on
//! a chapter; the browser renders whatever is here in registration order.

use super::{Catalog, Table, Topic};

fn topic(name: &'static str, tables: Vec<Table>) -> Topic {
    Topic { name, tables }
}

fn table(
    title: &'static str,
    columns: &'static [&'static str],
    rows: &'static [&'static [&'static str]],
) -> Table {
    Table {
        title,
        columns,
        rows,
    }
}

/// Build the full JavaScript chapter catalog.
pub fn catalog() -> Catalog {
    let mut catalog = Catalog::new();

    catalog.register(topic(
        "1. Introduction",
        vec![table(
            "Introduction to JavaScript",
            &["Topic", "Description", "Example"],
            &[
                &[
                    "What is JavaScript?",
                    "A lightweight, interpreted programming language for the web",
                    "<script>console.log(\"Hello World\")</script>",
                ],
                &[
                    "Usage",
                    "Client-side scripting, server-side (Node.js), embedded devices",
                    "document.getElementById(\"demo\").innerHTML = \"JS!\"",
                ],
                &[
                    "First JS Code",
                    "How to write your first script",
                    "<script>alert(\"Hi!\")</script>",
                ],
            ],
        )],
    ));

    catalog.register(topic(
        "2. Basic Syntax",
        vec![table(
            "JavaScript Syntax",
            &["Concept", "Description", "Example"],
            &[
                &["Statements", "Instructions that perform actions", "let x = 5;"],
                &[
                    "Semicolons",
                    "Ends statements (optional, but recommended)",
                    "let a = 10;",
                ],
                &[
                    "Comments",
                    "Single or multi-line explanations",
                    "// single line  /* multi-line */",
                ],
                &["Case Sensitivity", "JS is case sensitive", "let x vs let X"],
            ],
        )],
    ));

    catalog.register(topic(
        "3. Variables & Constants",
        vec![table(
            "Variables and Constants",
            &["Type", "Description", "Example"],
            &[
                &["var", "Function-scoped variable (old style)", "var a = 1;"],
                &["let", "Block-scoped variable", "let b = 2;"],
                &["const", "Block-scoped constant", "const PI = 3.14;"],
                &[
                    "Hoisting",
                    "var declarations are hoisted, let/const are not",
                    "console.log(a); var a = 2;",
                ],
            ],
        )],
    ));

    catalog.register(topic(
        "4. Operators",
        vec![table(
            "JavaScript Operators",
            &["Operator", "Description", "Example"],
            &[
                &["+", "Addition or string concatenation", "a + b"],
                &["-", "Subtraction", "a - b"],
                &["*", "Multiplication", "a * b"],
                &["/", "Division", "a / b"],
                &["%", "Modulus (remainder)", "a % b"],
                &["==", "Equal to (loose)", "a == b"],
                &["===", "Equal value & type (strict)", "a === b"],
                &["!=", "Not equal", "a != b"],
                &["!==", "Not equal value or type", "a !== b"],
                &[">", "Greater than", "a > b"],
                &["<", "Less than", "a < b"],
                &["&&", "Logical AND", "a && b"],
                &["||", "Logical OR", "a || b"],
                &["!", "Logical NOT", "!a"],
            ],
        )],
    ));

    catalog.register(topic(
        "5. Control Flow",
        vec![table(
            "Control Flow Statements",
            &["Statement", "Description", "Example"],
            &[
                &["if", "Conditional execution", "if (x > 0) {...}"],
                &["else", "Alternative branch", "if (...) {...} else {...}"],
                &[
                    "else if",
                    "Multiple alternatives",
                    "if (...) {...} else if (...) {...}",
                ],
                &["switch", "Multi-way branching", "switch(val){case 1: ...}"],
                &[
                    "for",
                    "Loop for fixed repetitions",
                    "for(let i=0;i<5;i++){...}",
                ],
                &["while", "Loop while condition true", "while(x < 5){...}"],
                &[
                    "do...while",
                    "Loop executes at least once",
                    "do {...} while(x < 5);",
                ],
                &["break", "Exit current loop/statement", "break;"],
                &["continue", "Skip to next iteration", "continue;"],
            ],
        )],
    ));

    catalog.register(topic(
        "6. Objects & Arrays",
        vec![table(
            "Common Array & Object Methods",
            &["Method", "Description", "Example"],
            &[
                &[
                    ".push()",
                    "Adds one or more elements to the end of an array",
                    "arr.push(5)",
                ],
                &[
                    ".pop()",
                    "Removes the last element of the array and returns it",
                    "arr.pop()",
                ],
                &[
                    ".shift()",
                    "Removes the first element of the array and returns it",
                    "arr.shift()",
                ],
                &[
                    ".unshift()",
                    "Adds one or more elements at the beginning of an array",
                    "arr.unshift(0)",
                ],
                &[
                    ".join()",
                    "Joins all elements into a string with a separator",
                    "arr.join('-')",
                ],
                &[
                    ".slice()",
                    "Returns a shallow copy of a portion of an array",
                    "arr.slice(1, 3)",
                ],
                &[
                    ".splice()",
                    "Changes array content by removing or replacing elements",
                    "arr.splice(2, 1, \"new\")",
                ],
                &[
                    ".map()",
                    "Creates a new array by applying a function to each element",
                    "arr.map(x => x * 2)",
                ],
                &[
                    ".filter()",
                    "Creates a new array with elements that pass a test",
                    "arr.filter(x => x > 2)",
                ],
                &[
                    ".reduce()",
                    "Executes a reducer function to reduce array to a value",
                    "arr.reduce((a,b) => a + b, 0)",
                ],
                &[
                    ".forEach()",
                    "Executes a provided function once for each element",
                    "arr.forEach(x => console.log(x))",
                ],
                &[
                    ".find()",
                    "Returns the first element that satisfies a condition",
                    "arr.find(x => x === 5)",
                ],
                &[".includes()", "Checks if an array includes a value", "arr.includes(3)"],
                &[
                    ".indexOf()",
                    "Returns the first index of an element, or -1",
                    "arr.indexOf(2)",
                ],
                &[".concat()", "Merges two or more arrays", "[1,2].concat([3,4])"],
                &[".reverse()", "Reverses the order of the elements", "arr.reverse()"],
                &[".sort()", "Sorts the elements of an array", "arr.sort((a,b) => a - b)"],
                &["Array.isArray()", "Checks if a value is an array", "Array.isArray(arr)"],
                &[
                    "Object.keys()",
                    "Array of an object's own enumerable property names",
                    "Object.keys(obj)",
                ],
                &[
                    "Object.values()",
                    "Array of an object's own enumerable property values",
                    "Object.values(obj)",
                ],
                &[
                    "Object.entries()",
                    "Array of key-value pairs of an object",
                    "Object.entries(obj)",
                ],
                &[
                    "Object.assign()",
                    "Copies enumerable properties from source to target",
                    "Object.assign(target, source)",
                ],
                &["delete obj.key", "Removes a property from an object", "delete obj.name"],
                &["in", "Checks if a property exists in an object", "'name' in obj"],
                &["Object.freeze()", "Prevents modification to an object", "Object.freeze(obj)"],
                &[
                    "Object.create()",
                    "Creates a new object with the specified prototype",
                    "Object.create(proto)",
                ],
            ],
        )],
    ));

    catalog.register(topic(
        "7. Functions",
        vec![table(
            "JavaScript Functions",
            &["Concept", "Description", "Example"],
            &[
                &[
                    "Function Declaration",
                    "Basic function definition",
                    "function greet(name) { return \"Hi \" + name; }",
                ],
                &[
                    "Function Expression",
                    "Assign function to a variable",
                    "const sum = function(a, b) { return a + b; }",
                ],
                &[
                    "Arrow Function",
                    "Short syntax for functions",
                    "const double = x => x * 2",
                ],
                &[
                    "Parameters & Arguments",
                    "Values passed to a function",
                    "greet(\"Sam\")",
                ],
                &[
                    "Default Parameters",
                    "Function parameters with defaults",
                    "function demo(x=5) { ... }",
                ],
                &[
                    "Rest Parameters",
                    "Handle many arguments as an array",
                    "function fn(...args) { }",
                ],
                &["Return Statement", "Specifies the function output", "return result"],
                &[
                    "IIFE",
                    "Immediately-Invoked Function Expression",
                    "(function(){ ... })()",
                ],
            ],
        )],
    ));

    catalog.register(topic(
        "8. Scope & Hoisting",
        vec![table(
            "Scope and Hoisting Concepts",
            &["Concept", "Description", "Example"],
            &[
                &["Global Scope", "Variables accessible everywhere", "let x = 10;"],
                &[
                    "Local/Function Scope",
                    "Variables accessible within a function",
                    "function test() { let a = 3; }",
                ],
                &[
                    "Block Scope",
                    "let/const inside {} creates block scope",
                    "if (true) { let b = 5; }",
                ],
                &[
                    "var Hoisting",
                    "var declarations hoisted to top of function/scope",
                    "console.log(a); var a = 2;",
                ],
                &[
                    "let/const Hoisting",
                    "let/const are hoisted but not initialized",
                    "console.log(b); let b = 4; // ReferenceError",
                ],
                &[
                    "Closure",
                    "Functions remember variables from their scope",
                    "function outer() { let x = 1; return () => console.log(x); }",
                ],
            ],
        )],
    ));

    catalog.register(topic(
        "9. Strings",
        vec![table(
            "Common String Methods & Properties",
            &["Method/Property", "Description", "Example"],
            &[
                &[".length", "Returns length of string", "\"test\".length"],
                &[".toUpperCase()", "Converts to uppercase", "\"js\".toUpperCase()"],
                &[".toLowerCase()", "Converts to lowercase", "\"JS\".toLowerCase()"],
                &[".charAt()", "Returns character at index", "\"abc\".charAt(1)"],
                &[
                    ".includes()",
                    "Checks if substring is present",
                    "\"hello\".includes(\"el\")",
                ],
                &[".indexOf()", "First occurrence of substring", "\"hello\".indexOf(\"l\")"],
                &[
                    ".lastIndexOf()",
                    "Last occurrence of substring",
                    "\"hello\".lastIndexOf(\"l\")",
                ],
                &[".slice()", "Extracts part of string", "\"hello\".slice(1, 4)"],
                &[".substring()", "Similar to slice", "\"hello\".substring(1, 4)"],
                &[".replace()", "Replaces substring", "\"foo\".replace(\"f\", \"b\")"],
                &[".split()", "Splits string into array", "\"a,b\".split(\",\")"],
                &[".trim()", "Removes whitespace from ends", "\" test \".trim()"],
                &[".concat()", "Joins two strings", "\"a\".concat(\"b\")"],
                &[
                    "Template literals",
                    "String interpolation with backticks",
                    "`Value: ${x}`",
                ],
            ],
        )],
    ));

    catalog.register(topic(
        "10. Numbers & Math",
        vec![table(
            "Numbers, Math Methods, and Properties",
            &["Method/Property", "Description", "Example"],
            &[
                &["Number()", "Converts to Number type", "Number(\"123\")"],
                &["parseInt()", "Parses string to integer", "parseInt(\"42px\")"],
                &["parseFloat()", "Parses string to float", "parseFloat(\"3.14\")"],
                &["isNaN()", "Checks if value is NaN", "isNaN(\"a\")"],
                &["toFixed()", "Rounds number to fixed decimals", "(2.345).toFixed(2)"],
                &["Math.abs()", "Returns absolute value", "Math.abs(-3)"],
                &["Math.round()", "Rounds to nearest integer", "Math.round(2.7)"],
                &["Math.floor()", "Rounds down", "Math.floor(2.9)"],
                &["Math.ceil()", "Rounds up", "Math.ceil(2.1)"],
                &["Math.max()", "Largest of arguments", "Math.max(1, 2, 9)"],
                &["Math.min()", "Smallest of arguments", "Math.min(1, 2, 9)"],
                &["Math.random()", "Random number [0,1)", "Math.random()"],
                &["Math.pow()", "Exponentiation", "Math.pow(2, 3)"],
                &["Math.sqrt()", "Square root", "Math.sqrt(25)"],
            ],
        )],
    ));

    catalog.register(topic(
        "11. Dates",
        vec![table(
            "Date Methods & Usage",
            &["Method/Property", "Description", "Example"],
            &[
                &["Date()", "Creates a new date object", "let d = new Date()"],
                &[".getFullYear()", "Gets 4-digit year", "d.getFullYear()"],
                &[".getMonth()", "Gets month (0-11)", "d.getMonth()"],
                &[".getDate()", "Gets day of month", "d.getDate()"],
                &[".getDay()", "Gets day of week (0=Sun)", "d.getDay()"],
                &[".getHours()", "Hour of the day", "d.getHours()"],
                &[".getMinutes()", "Minutes of the hour", "d.getMinutes()"],
                &[".getTime()", "Milliseconds since 1970", "d.getTime()"],
                &[".setFullYear()", "Sets year", "d.setFullYear(2025)"],
                &["Date.now()", "Current ms since 1970", "Date.now()"],
                &["toLocaleString()", "Localized string", "d.toLocaleString()"],
            ],
        )],
    ));

    catalog.register(topic(
        "12. Regular Expressions",
        vec![table(
            "Basic RegExp Patterns & Methods",
            &["Pattern/Method", "Description", "Example"],
            &[
                &["/abc/", "Matches literal \"abc\"", "/abc/.test(\"abc\")"],
                &[".test()", "Tests for match (true/false)", "/a/.test(\"cat\")"],
                &[".exec()", "Returns match details or null", "/\\d+/.exec(\"12abc\")"],
                &[".match()", "Gets matches in string", "\"abc123\".match(/\\d+/)"],
                &[
                    ".replace()",
                    "Replace match in string",
                    "\"1a2\".replace(/\\d/g, \"*\")",
                ],
                &[".search()", "Find index of match", "\"abc1\".search(/\\d/)"],
                &[".split()", "Split string by regexp", "\"a1b2\".split(/\\d/)"],
                &["Character classes", "Match sets, e.g., [a-z]", "/[a-z]/.test(\"x\")"],
                &["Quantifiers", "* + ? {n}", "/a{2,}/.test(\"aaa\")"],
                &["Anchors", "^ $", "/^a/.test(\"abc\")"],
                &["Groups", "( )", "/(ab)+/.test(\"abab\")"],
            ],
        )],
    ));

    catalog.register(topic(
        "13. Error Handling",
        vec![table(
            "Error Handling Methods & Best Practices",
            &["Concept/Method", "Description", "Example"],
            &[
                &[
                    "try...catch",
                    "Handle errors gracefully",
                    "try { riskyFn() } catch (e) { console.log(e) }",
                ],
                &[
                    "finally",
                    "Block always runs after try/catch",
                    "try {} catch(e) {} finally { cleanup(); }",
                ],
                &[
                    "throw",
                    "Manually throw an error",
                    "throw new Error(\"Something went wrong!\")",
                ],
                &["Error object", "Built-in error object", "const err = new Error(\"msg\")"],
                &[
                    "Custom error",
                    "Define your own error types",
                    "class CustomError extends Error {}",
                ],
            ],
        )],
    ));

    catalog.register(topic(
        "14. JSON",
        vec![table(
            "JSON (JavaScript Object Notation) Usage",
            &["Method/Concept", "Description", "Example"],
            &[
                &[
                    "JSON.stringify()",
                    "Convert JS object to JSON string",
                    "JSON.stringify({a:1, b:2})",
                ],
                &[
                    "JSON.parse()",
                    "Convert JSON string to JS object",
                    "JSON.parse('{\"a\":1, \"b\":2}')",
                ],
                &[
                    "Valid JSON",
                    "Must use double quotes on keys/strings",
                    "{\"name\": \"Sam\"}",
                ],
                &[
                    "Nested JSON",
                    "Objects/arrays inside JSON",
                    "{\"user\": {\"name\":\"Sam\"}, \"hobbies\":[\"js\"]}",
                ],
            ],
        )],
    ));

    catalog.register(topic(
        "15. DOM Manipulation",
        vec![table(
            "DOM Selection & Manipulation",
            &["Method/Concept", "Description", "Example"],
            &[
                &[
                    "getElementById()",
                    "Get element by ID",
                    "document.getElementById(\"demo\")",
                ],
                &[
                    "getElementsByClassName()",
                    "All elements by class",
                    "document.getElementsByClassName(\"cls\")",
                ],
                &[
                    "querySelector()",
                    "First element matching selector",
                    "document.querySelector(\".main\")",
                ],
                &[
                    "querySelectorAll()",
                    "All elements matching selector",
                    "document.querySelectorAll(\"p\")",
                ],
                &["innerHTML", "Get/set HTML content", "el.innerHTML = \"<b>Hi</b>\""],
                &["textContent", "Get/set text content", "el.textContent = \"Hello\""],
                &[
                    "setAttribute()",
                    "Set an attribute",
                    "el.setAttribute(\"src\", \"img.jpg\")",
                ],
                &["style", "Change inline CSS", "el.style.color = \"red\""],
                &["appendChild()", "Add child node", "parent.appendChild(child)"],
                &["removeChild()", "Remove child node", "parent.removeChild(child)"],
            ],
        )],
    ));

    catalog.register(topic(
        "16. Events",
        vec![table(
            "Event Handling",
            &["Method/Concept", "Description", "Example"],
            &[
                &[
                    "onclick",
                    "Inline click event handler",
                    "<button onclick=\"myFn()\">Go</button>",
                ],
                &[
                    "addEventListener()",
                    "Modern way to handle events",
                    "el.addEventListener(\"click\", myFn)",
                ],
                &[
                    "event object",
                    "Event details in handler",
                    "el.onclick = function(e) { console.log(e.type); }",
                ],
                &[
                    "Mouse events",
                    "React to mouse actions",
                    "\"click\", \"mouseover\", \"mouseout\"",
                ],
                &["Keyboard events", "React to keyboard actions", "\"keydown\", \"keyup\""],
                &["Prevent default", "Block default action", "event.preventDefault()"],
                &["Stop propagation", "Stop bubbling up", "event.stopPropagation()"],
            ],
        )],
    ));

    catalog.register(topic(
        "17. Timers",
        vec![table(
            "setTimeout / setInterval",
            &["Method", "Description", "Example"],
            &[
                &[
                    "setTimeout()",
                    "Run once after delay",
                    "setTimeout(() => alert(\"Hello\"), 1000)",
                ],
                &["clearTimeout()", "Cancel timeout", "clearTimeout(id)"],
                &[
                    "setInterval()",
                    "Run repeatedly every interval",
                    "setInterval(fn, 2000)",
                ],
                &["clearInterval()", "Cancel interval", "clearInterval(id)"],
            ],
        )],
    ));

    catalog.register(topic(
        "18. ES6 & Modern JS",
        vec![table(
            "Popular ES6+ and Modern JavaScript Features",
            &["Feature", "Description", "Example"],
            &[
                &[
                    "let & const",
                    "Block-scoped variable/constant",
                    "let a = 1; const b = 2;",
                ],
                &["Arrow Functions", "Short function syntax", "(a, b) => a + b"],
                &[
                    "Default Parameters",
                    "Function defaults",
                    "function add(x = 10) { ... }",
                ],
                &["Destructuring", "Unpack values/props", "const {a, b} = obj"],
                &["Spread Operator", "Expand arrays/objects", "[...arr1, ...arr2]"],
                &["Rest Operator", "Multiple args as array", "function fn(...args) {}"],
                &[
                    "Template Literals",
                    "Multiline & embedded expressions",
                    "`Hello, ${name}!`",
                ],
                &[
                    "Classes",
                    "Class syntax",
                    "class Person { constructor(n) { this.name=n; } }",
                ],
                &["Promises", "Asynchronous control", "new Promise((res,rej)=>{})"],
                &[
                    "Modules",
                    "Import/export code between files",
                    "import x from \"./x.js\";",
                ],
            ],
        )],
    ));

    catalog.register(topic(
        "19. Modules",
        vec![table(
            "JavaScript Module Systems",
            &["Syntax/Concept", "Description", "Example"],
            &[
                &[
                    "ES Modules",
                    "Standard import/export",
                    "import x from \"./mod.js\"; export default y;",
                ],
                &[
                    "CommonJS",
                    "Node.js require/module.exports",
                    "const x = require(\"./mod\"); module.exports = y;",
                ],
                &["Named Exports", "Multiple exports per file", "export function add() {}"],
                &[
                    "Dynamic Import",
                    "Import asynchronously",
                    "const mod = await import(\"./mod.js\");",
                ],
            ],
        )],
    ));

    catalog.register(topic(
        "20. Promises & Async/Await",
        vec![table(
            "Asynchronous Programming Tools",
            &["Concept", "Description", "Example"],
            &[
                &[
                    "Promise",
                    "Object representing future value",
                    "let p = new Promise((res,rej)=>{})",
                ],
                &[
                    "then()",
                    "Runs after promise fulfilled",
                    "p.then(val => console.log(val))",
                ],
                &["catch()", "Runs after rejection", "p.catch(err => ... )"],
                &["finally()", "Runs after settle", "p.finally(() => ... )"],
                &[
                    "Async function",
                    "Declares a function as async",
                    "async function fn() { ... }",
                ],
                &[
                    "Await",
                    "Pause in async function for promise",
                    "let data = await getData()",
                ],
            ],
        )],
    ));

    catalog.register(topic(
        "21. AJAX & Fetch API",
        vec![table(
            "Fetch / XMLHttpRequest / AJAX",
            &["Method/Concept", "Description", "Example"],
            &[
                &[
                    "fetch()",
                    "Modern AJAX call (returns promise)",
                    "fetch(\"https://api.com/data\")",
                ],
                &[
                    ".then()",
                    "Handle response",
                    "fetch(...).then(resp => resp.json())",
                ],
                &[
                    "XMLHttpRequest",
                    "Old-school AJAX API",
                    "let xhr = new XMLHttpRequest(); xhr.open(\"GET\", url);",
                ],
                &[
                    "async/await with fetch",
                    "Modern async fetch",
                    "const data = await fetch(url).then(r => r.json())",
                ],
            ],
        )],
    ));

    catalog.register(topic(
        "22. Local Storage & Session Storage",
        vec![table(
            "LocalStorage / SessionStorage Methods",
            &["API/Method", "Description", "Example"],
            &[
                &[
                    "localStorage.setItem()",
                    "Store key/value permanently",
                    "localStorage.setItem(\"x\", \"5\")",
                ],
                &["localStorage.getItem()", "Retrieve value", "localStorage.getItem(\"x\")"],
                &["localStorage.removeItem()", "Remove item", "localStorage.removeItem(\"x\")"],
                &["localStorage.clear()", "Clear all storage", "localStorage.clear()"],
                &[
                    "sessionStorage.setItem()",
                    "Session key/value",
                    "sessionStorage.setItem(\"y\", \"7\")",
                ],
                &["sessionStorage.getItem()", "Session value", "sessionStorage.getItem(\"y\")"],
                &["sessionStorage.clear()", "Clear all session storage", "sessionStorage.clear()"],
            ],
        )],
    ));

    catalog.register(topic(
        "23. Debugging & Best Practices",
        vec![table(
            "Debugging Tools & Best Practices",
            &["Tool/Concept", "Description", "Example"],
            &[
                &["console.log()", "Prints debugging value", "console.log(obj)"],
                &["console.error()", "Prints error values", "console.error(err)"],
                &[
                    "Debugger statement",
                    "Pauses execution if dev tools open",
                    "debugger;",
                ],
                &[
                    "Breakpoints",
                    "Pause code in browser dev tools",
                    "Use in Sources panel",
                ],
                &["Linting", "Auto-check code quality", "ESLint, JSHint"],
                &["Code Formatting", "Consistent code layout", "Prettier"],
                &[
                    "Separation of Concerns",
                    "Organize code by responsibility",
                    "Files by feature/module",
                ],
                &["Commenting", "Describe non-obvious code", "// explanation..."],
            ],
        )],
    ));

    catalog
}
