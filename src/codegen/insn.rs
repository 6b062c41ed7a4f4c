//! Abstract instruction model handed to the bytecode emitter.
//!
//! Every instruction is fully specified (owner, member name, descriptor), so
//! the emitter translates one-to-one and makes no decisions of its own.
//! `Display` renders an ASM-textifier style listing for logs and tests.

use smol_str::SmolStr;
use std::fmt;

use crate::base::{InternalName, JvmType, MethodDescriptor};

// ============================================================================
// OPERANDS
// ============================================================================

/// The expression an accessor is invoked on.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Receiver {
    /// The enclosing instance.
    This,
    /// A local variable slot.
    Local(u16),
    /// A receiver the caller materializes itself, identified by a label.
    Opaque(SmolStr),
}

impl fmt::Display for Receiver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Receiver::This => f.write_str("this"),
            Receiver::Local(slot) => write!(f, "local {slot}"),
            Receiver::Opaque(label) => write!(f, "<{label}>"),
        }
    }
}

/// A static or instance field reference.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldRef {
    pub owner: InternalName,
    pub name: SmolStr,
    pub ty: JvmType,
}

/// A method reference with its full descriptor.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MethodRef {
    pub owner: InternalName,
    pub name: SmolStr,
    pub descriptor: MethodDescriptor,
}

impl MethodRef {
    pub fn new(
        owner: InternalName,
        name: impl Into<SmolStr>,
        descriptor: MethodDescriptor,
    ) -> Self {
        Self {
            owner,
            name: name.into(),
            descriptor,
        }
    }
}

// ============================================================================
// INSTRUCTIONS
// ============================================================================

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Instruction {
    /// Push the receiver, coerced to `ty`.
    LoadReceiver { receiver: Receiver, ty: JvmType },
    /// `GETSTATIC`
    GetStatic(FieldRef),
    /// `INVOKEVIRTUAL` on a class (never an interface).
    InvokeVirtual(MethodRef),
    /// `CHECKCAST` of the top of stack.
    CheckCast(JvmType),
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instruction::LoadReceiver { receiver, ty } => {
                write!(f, "LOAD {receiver} : {}", ty.descriptor())
            }
            Instruction::GetStatic(field) => write!(
                f,
                "GETSTATIC {}.{} : {}",
                field.owner,
                field.name,
                field.ty.descriptor()
            ),
            Instruction::InvokeVirtual(method) => write!(
                f,
                "INVOKEVIRTUAL {}.{} {}",
                method.owner, method.name, method.descriptor
            ),
            Instruction::CheckCast(ty) => write!(f, "CHECKCAST {}", ty.type_operand()),
        }
    }
}

/// An ordered list of instructions that leaves the accessor's value on the stack.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InstructionSequence {
    instructions: Vec<Instruction>,
}

impl InstructionSequence {
    pub fn as_slice(&self) -> &[Instruction] {
        &self.instructions
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Instruction> {
        self.instructions.iter()
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    pub fn into_vec(self) -> Vec<Instruction> {
        self.instructions
    }
}

impl From<Vec<Instruction>> for InstructionSequence {
    fn from(instructions: Vec<Instruction>) -> Self {
        Self { instructions }
    }
}

impl<'a> IntoIterator for &'a InstructionSequence {
    type Item = &'a Instruction;
    type IntoIter = std::slice::Iter<'a, Instruction>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for InstructionSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, insn) in self.instructions.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{insn}")?;
        }
        Ok(())
    }
}
