//! Federation exceptions
//!
//! Every failure a federate can observe is an [`Exception`]: a kind from the
//! closed HLA catalogue plus a free-form reason. Transport failures, local
//! contract violations and unimplemented services all use
//! [`ExceptionKind::RtiInternalError`]; exceptions reported by the
//! coordinator keep the kind it sent.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

macro_rules! exception_kinds {
    ($($variant:ident => $name:literal),* $(,)?) => {
        /// Closed catalogue of exception kinds carried on the wire
        ///
        /// Adding a kind changes the protocol version.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum ExceptionKind {
            $($variant,)*
        }

        impl ExceptionKind {
            /// Name as used by the HLA 1.3 API
            pub fn name(self) -> &'static str {
                match self {
                    $(ExceptionKind::$variant => $name,)*
                }
            }
        }
    };
}

exception_kinds! {
    NoException => "NO_EXCEPTION",
    ArrayIndexOutOfBounds => "ArrayIndexOutOfBounds",
    AsynchronousDeliveryAlreadyDisabled => "AsynchronousDeliveryAlreadyDisabled",
    AsynchronousDeliveryAlreadyEnabled => "AsynchronousDeliveryAlreadyEnabled",
    AttributeAcquisitionWasNotRequested => "AttributeAcquisitionWasNotRequested",
    AttributeAcquisitionWasNotCanceled => "AttributeAcquisitionWasNotCanceled",
    AttributeAlreadyBeingAcquired => "AttributeAlreadyBeingAcquired",
    AttributeAlreadyBeingDivested => "AttributeAlreadyBeingDivested",
    AttributeAlreadyOwned => "AttributeAlreadyOwned",
    AttributeDivestitureWasNotRequested => "AttributeDivestitureWasNotRequested",
    AttributeNotDefined => "AttributeNotDefined",
    AttributeNotKnown => "AttributeNotKnown",
    AttributeNotOwned => "AttributeNotOwned",
    AttributeNotPublished => "AttributeNotPublished",
    ConcurrentAccessAttempted => "ConcurrentAccessAttempted",
    CouldNotDiscover => "CouldNotDiscover",
    CouldNotOpenFed => "CouldNotOpenFED",
    CouldNotRestore => "CouldNotRestore",
    DeletePrivilegeNotHeld => "DeletePrivilegeNotHeld",
    DimensionNotDefined => "DimensionNotDefined",
    EnableTimeConstrainedPending => "EnableTimeConstrainedPending",
    EnableTimeConstrainedWasNotPending => "EnableTimeConstrainedWasNotPending",
    EnableTimeRegulationPending => "EnableTimeRegulationPending",
    EnableTimeRegulationWasNotPending => "EnableTimeRegulationWasNotPending",
    ErrorReadingFed => "ErrorReadingFED",
    EventNotKnown => "EventNotKnown",
    FederateAlreadyExecutionMember => "FederateAlreadyExecutionMember",
    FederateInternalError => "FederateInternalError",
    FederateLoggingServiceCalls => "FederateLoggingServiceCalls",
    FederateNotExecutionMember => "FederateNotExecutionMember",
    FederateOwnsAttributes => "FederateOwnsAttributes",
    FederateWasNotAskedToReleaseAttribute => "FederateWasNotAskedToReleaseAttribute",
    FederatesCurrentlyJoined => "FederatesCurrentlyJoined",
    FederationExecutionAlreadyExists => "FederationExecutionAlreadyExists",
    FederationExecutionDoesNotExist => "FederationExecutionDoesNotExist",
    FederationTimeAlreadyPassed => "FederationTimeAlreadyPassed",
    HandleValuePairMaximumExceeded => "HandleValuePairMaximumExceeded",
    InteractionClassNotDefined => "InteractionClassNotDefined",
    InteractionClassNotKnown => "InteractionClassNotKnown",
    InteractionClassNotPublished => "InteractionClassNotPublished",
    InteractionClassNotSubscribed => "InteractionClassNotSubscribed",
    InteractionParameterNotDefined => "InteractionParameterNotDefined",
    InteractionParameterNotKnown => "InteractionParameterNotKnown",
    InvalidExtents => "InvalidExtents",
    InvalidFederationTime => "InvalidFederationTime",
    InvalidHandleValuePairSetContext => "InvalidHandleValuePairSetContext",
    InvalidLookahead => "InvalidLookahead",
    InvalidOrderingHandle => "InvalidOrderingHandle",
    InvalidRegionContext => "InvalidRegionContext",
    InvalidResignAction => "InvalidResignAction",
    InvalidRetractionHandle => "InvalidRetractionHandle",
    InvalidTransportationHandle => "InvalidTransportationHandle",
    MemoryExhausted => "MemoryExhausted",
    NameNotFound => "NameNotFound",
    ObjectAlreadyRegistered => "ObjectAlreadyRegistered",
    ObjectClassNotDefined => "ObjectClassNotDefined",
    ObjectClassNotKnown => "ObjectClassNotKnown",
    ObjectClassNotPublished => "ObjectClassNotPublished",
    ObjectClassNotSubscribed => "ObjectClassNotSubscribed",
    ObjectNotKnown => "ObjectNotKnown",
    OwnershipAcquisitionPending => "OwnershipAcquisitionPending",
    RegionInUse => "RegionInUse",
    RegionNotKnown => "RegionNotKnown",
    RestoreInProgress => "RestoreInProgress",
    RestoreNotRequested => "RestoreNotRequested",
    RtiInternalError => "RTIinternalError",
    SaveInProgress => "SaveInProgress",
    SaveNotInitiated => "SaveNotInitiated",
    SpaceNotDefined => "SpaceNotDefined",
    SpecifiedSaveLabelDoesNotExist => "SpecifiedSaveLabelDoesNotExist",
    SynchronizationPointLabelWasNotAnnounced => "SynchronizationPointLabelWasNotAnnounced",
    TimeAdvanceAlreadyInProgress => "TimeAdvanceAlreadyInProgress",
    TimeAdvanceWasNotInProgress => "TimeAdvanceWasNotInProgress",
    TimeConstrainedAlreadyEnabled => "TimeConstrainedAlreadyEnabled",
    TimeConstrainedWasNotEnabled => "TimeConstrainedWasNotEnabled",
    TimeRegulationAlreadyEnabled => "TimeRegulationAlreadyEnabled",
    TimeRegulationWasNotEnabled => "TimeRegulationWasNotEnabled",
    UnableToPerformSave => "UnableToPerformSave",
    ValueCountExceeded => "ValueCountExceeded",
    ValueLengthExceeded => "ValueLengthExceeded",
}

impl ExceptionKind {
    pub fn is_exception(self) -> bool {
        self != ExceptionKind::NoException
    }
}

impl fmt::Display for ExceptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind}: {reason}")]
pub struct Exception {
    pub kind: ExceptionKind,
    pub reason: String,
}

impl Exception {
    pub fn new(kind: ExceptionKind, reason: impl Into<String>) -> Self {
        Self {
            kind,
            reason: reason.into(),
        }
    }

    pub fn internal(reason: impl Into<String>) -> Self {
        Self::new(ExceptionKind::RtiInternalError, reason)
    }

    /// Service that exists in the interface but is not provided
    pub fn unimplemented(service: &str) -> Self {
        Self::internal(format!("unimplemented service {}", service))
    }

    pub fn is(&self, kind: ExceptionKind) -> bool {
        self.kind == kind
    }
}

pub type Result<T> = std::result::Result<T, Exception>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_uses_hla_names() {
        let e = Exception::new(ExceptionKind::RegionNotKnown, "region 4");
        assert_eq!(e.to_string(), "RegionNotKnown: region 4");
        assert_eq!(ExceptionKind::RtiInternalError.to_string(), "RTIinternalError");
    }

    #[test]
    fn unimplemented_is_internal() {
        let e = Exception::unimplemented("retract");
        assert!(e.is(ExceptionKind::RtiInternalError));
        assert_eq!(e.reason, "unimplemented service retract");
    }

    #[test]
    fn no_exception_is_not_an_exception() {
        assert!(!ExceptionKind::NoException.is_exception());
        assert!(ExceptionKind::SaveInProgress.is_exception());
    }
}
