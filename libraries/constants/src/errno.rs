// The subset of Linux errno values a character-device driver can surface.
// Discriminants are the negated errno, so a value can be handed back to the
// VFS dispatch layer as-is.
#[repr(isize)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrNo {
    // Operation not permitted
    OperationNotPermitted = -1,
    // Input/output error
    InputOutputError = -5,
    // No such device or address
    NoSuchDeviceOrAddress = -6,
    // Resource temporarily unavailable
    ResourceTemporarilyUnavailable = -11,
    // Cannot allocate memory
    CannotAllocateMemory = -12,
    // Permission denied
    PermissionDenied = -13,
    // Bad address
    BadAddress = -14,
    // Device or resource busy
    DeviceOrResourceBusy = -16,
    // No such device
    NoSuchDevice = -19,
    // Invalid argument
    InvalidArgument = -22,
    // Too many open files in system
    TooManyOpenFilesInSystem = -23,
    // Function not implemented
    FunctionNotImplemented = -38,
}

impl ErrNo {
    pub const fn as_isize(self) -> isize {
        self as isize
    }
}
