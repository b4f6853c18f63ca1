//! # Sentinel - Event Schema Layer for an eBPF Syscall and Kernel-Event Tracer
//!
//! Sentinel is the user-space half of the contract between kernel-side
//! instrumentation and everything that consumes its output. It owns the
//! catalogue of traceable events and the rules for interpreting their raw
//! argument bytes.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                  Instrumentation (Kernel)                       │
//! │  • syscall / kprobe / kretprobe / tracepoint / raw tracepoint   │
//! │  • tags captured bytes with the event id                        │
//! └───────────────────────┬─────────────────────────────────────────┘
//!                         │ id + argument bytes
//!                         ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                     Sentinel (This Crate)                       │
//! │                                                                 │
//! │  ┌──────────────┐   ┌──────────────┐   ┌──────────────┐         │
//! │  │   Registry   │──▶│    Codec     │──▶│    Event     │         │
//! │  │ (id → schema)│   │ (positional) │   │  (decoded)   │         │
//! │  └──────────────┘   └──────────────┘   └──────────────┘         │
//! │         │                                     ▲                 │
//! │         ▼                                     │                 │
//! │  ┌──────────────┐                     ┌──────────────┐          │
//! │  │  Selection   │                     │  Namespace   │          │
//! │  │   Compat     │                     │  Bootstrap   │          │
//! │  │   Config     │                     │ (/proc/1/ns) │          │
//! │  └──────────────┘                     └──────────────┘          │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - [`registry`]: Event descriptors, argument schemas and named sets
//! - [`codec`]: Positional decoder and encoder for argument payloads
//! - [`event`]: The decoded event shape shared by all producers
//! - [`namespaces`]: Synthesizes `init_namespaces` from user space
//! - [`selection`]: Resolves set and event names to traced ids
//! - [`compat`]: i386 to x86_64 syscall id translation
//! - [`config`]: Scalar config pushed to the instrumentation's config map
//! - [`preflight`]: Environment checks with actionable messages
//! - [`cli`]: Command-line argument parsing
//! - [`domain`]: Core domain types and errors
//!
//! Identifiers and enumerations shared with the kernel side live in the
//! `sentinel-common` crate.
//!
//! ## Typical Usage
//!
//! ```bash
//! # What does execve carry?
//! ./sentinel show execve
//!
//! # Which ids does a session filtered to fs + execve trace?
//! ./sentinel select --set fs --event execve
//!
//! # Host namespaces, as the tracer reports them
//! sudo ./sentinel init-ns
//! ```

pub mod cli;
pub mod codec;
pub mod compat;
pub mod config;
pub mod domain;
pub mod event;
pub mod namespaces;
pub mod preflight;
pub mod registry;
pub mod selection;
