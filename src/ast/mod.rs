/// Program tree module
/// Contains the nodes the parser hands to the execution engine
///
/// Submodules:
/// - ast: The program body and its top-level node type
/// - variable: Typed single-assignment variables and references to them
/// - call: Function calls and their arguments
pub mod ast;
pub mod call;
pub mod variable;
