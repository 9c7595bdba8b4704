//! # Compliance Credential Issuer
//!
//! The on-chain gate between a zero-knowledge identity proof and a
//! soulbound credential. The issuer owns two things: a handle to the
//! verifier capability (the algebraic check) and the credential ledger
//! (the state). `verify` is the only write path.
//!
//! The verifier capability is a trait so deployments can wire the real
//! Groth16 verifier while tests wire a mock — the same split the original
//! deployment scripts make between `Verifier` and `MockVerifier`.

use std::sync::Arc;

use arx_protocol::account::AccountId;
use arx_protocol::zkp::{IdentityVerifier, ProofCalldata};

use crate::clock::Clock;
use crate::credential::{Credential, CredentialError, CredentialLedger};

// ---------------------------------------------------------------------------
// Verifier capability
// ---------------------------------------------------------------------------

/// The consumed proof-verification capability: pure, stateless,
/// deterministic. `true` means the proof convinced the verifier.
pub trait ProofVerifier: Send + Sync {
    /// Evaluates the proof against the circuit and its public inputs.
    fn check(&self, calldata: &ProofCalldata) -> bool;
}

/// Production verifier: decodes the calldata back into a Groth16 proof and
/// runs the pairing check against the identity circuit's verification key.
pub struct Groth16ProofVerifier {
    verifier: IdentityVerifier,
}

impl Groth16ProofVerifier {
    pub fn new(verifier: IdentityVerifier) -> Self {
        Self { verifier }
    }
}

impl ProofVerifier for Groth16ProofVerifier {
    fn check(&self, calldata: &ProofCalldata) -> bool {
        // Malformed calldata (off-curve points, unparseable scalars) is
        // indistinguishable from a failed pairing check at this boundary:
        // both are "not a valid proof".
        match calldata.decode() {
            Ok((proof, commitment)) => {
                self.verifier.verify(&proof, commitment).unwrap_or(false)
            }
            Err(_) => false,
        }
    }
}

/// Test verifier with a fixed verdict.
pub struct MockProofVerifier {
    pub verdict: bool,
}

impl ProofVerifier for MockProofVerifier {
    fn check(&self, _calldata: &ProofCalldata) -> bool {
        self.verdict
    }
}

// ---------------------------------------------------------------------------
// CredentialIssuer
// ---------------------------------------------------------------------------

/// Couples the verifier capability with the credential ledger.
pub struct CredentialIssuer {
    verifier: Box<dyn ProofVerifier>,
    ledger: CredentialLedger,
    clock: Arc<dyn Clock>,
}

impl CredentialIssuer {
    /// Wires an issuer to its verifier capability and the ledger clock.
    pub fn new(verifier: Box<dyn ProofVerifier>, clock: Arc<dyn Clock>) -> Self {
        Self {
            verifier,
            ledger: CredentialLedger::new(),
            clock,
        }
    }

    /// Submits an identity proof on behalf of `caller`.
    ///
    /// On acceptance the caller is recorded as verified and a credential
    /// issued. On any failure, no state changes.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialError::AlreadyVerified`] if the caller already
    /// holds a credential (checked before the proof — an already-verified
    /// account cannot mint a second credential no matter what it submits),
    /// and [`CredentialError::InvalidProof`] if the verifier rejects.
    pub fn verify(
        &mut self,
        caller: AccountId,
        calldata: &ProofCalldata,
    ) -> Result<(), CredentialError> {
        if self.ledger.is_verified(caller) {
            return Err(CredentialError::AlreadyVerified(caller));
        }

        if !self.verifier.check(calldata) {
            return Err(CredentialError::InvalidProof);
        }

        self.ledger.issue(caller, self.clock.now())?;

        tracing::info!(account = %caller, "compliance credential issued");
        Ok(())
    }

    /// Returns `true` if `account` has cleared the identity check.
    pub fn is_verified(&self, account: AccountId) -> bool {
        self.ledger.is_verified(account)
    }

    /// The credential record for `account`, if issued.
    pub fn credential(&self, account: AccountId) -> Option<&Credential> {
        self.ledger.credential(account)
    }

    /// Read-only handle to the underlying ledger, for components (the
    /// vault) that gate on verification status.
    pub fn ledger(&self) -> &CredentialLedger {
        &self.ledger
    }

    /// Mutable ledger access, for exercising the transfer surface.
    pub fn ledger_mut(&mut self) -> &mut CredentialLedger {
        &mut self.ledger
    }
}
