//! Per-page usage tables from the HID Usage Tables 1.2 and the related
//! class specifications.
//!
//! Names follow the standard with non-alphanumeric characters removed and
//! words capitalized; a usage whose standard name starts with a digit has
//! that digit moved behind the first word (e.g. `Digitizer3d`). Entries
//! named `…#` pair up to declare a numbered range resolved from the
//! token's decimal suffix.

use super::usage;
use super::usage_type::*;
use super::Entry;

/// Generic Desktop page, HID Usage Tables 1.2 ch. 4.
pub(crate) const GENERIC_DESKTOP: &[Entry] = &[
    usage("Pointer", 0x01, CP),
    usage("Mouse", 0x02, CA),
    usage("Joystick", 0x04, CA),
    usage("Gamepad", 0x05, CA),
    usage("Keyboard", 0x06, CA),
    usage("Keypad", 0x07, CA),
    usage("MultiAxisController", 0x08, CA),
    usage("TabletPcSystemControls", 0x09, CA),
    usage("WaterCoolingDevice", 0x0A, CA),
    usage("ComputerChassisDevice", 0x0B, CA),
    usage("WirelessRadioControls", 0x0C, CA),
    usage("PortableDeviceControl", 0x0D, CA),
    usage("SystemMultiAxisController", 0x0E, CA),
    usage("SpatialController", 0x0F, CA),
    usage("AssistiveControl", 0x10, CA),
    usage("DeviceDock", 0x11, CA),
    usage("DockableDevice", 0x12, CA),
    usage("X", 0x30, DV),
    usage("Y", 0x31, DV),
    usage("Z", 0x32, DV),
    usage("Rx", 0x33, DV),
    usage("Ry", 0x34, DV),
    usage("Rz", 0x35, DV),
    usage("Slider", 0x36, DV),
    usage("Dial", 0x37, DV),
    usage("Wheel", 0x38, DV),
    usage("HatSwitch", 0x39, DV),
    usage("CountedBuffer", 0x3A, CL),
    usage("ByteCount", 0x3B, DV),
    usage("MotionWakeup", 0x3C, OSC | DF),
    usage("Start", 0x3D, OOC),
    usage("Select", 0x3E, OOC),
    usage("Vx", 0x40, DV),
    usage("Vy", 0x41, DV),
    usage("Vz", 0x42, DV),
    usage("Vbrx", 0x43, DV),
    usage("Vbry", 0x44, DV),
    usage("Vbrz", 0x45, DV),
    usage("Vno", 0x46, DV),
    usage("FeatureNotification", 0x47, DV | DF),
    usage("ResolutionMultiplier", 0x48, DV),
    usage("Qx", 0x49, DV),
    usage("Qy", 0x4A, DV),
    usage("Qz", 0x4B, DV),
    usage("Qw", 0x4C, DV),
    usage("SystemControl", 0x80, CA),
    usage("SystemPowerDown", 0x81, OSC),
    usage("SystemSleep", 0x82, OSC),
    usage("SystemWakeUp", 0x83, OSC),
    usage("SystemContextMenu", 0x84, OSC),
    usage("SystemMainMenu", 0x85, OSC),
    usage("SystemAppMenu", 0x86, OSC),
    usage("SystemMenuHelp", 0x87, OSC),
    usage("SystemMenuExit", 0x88, OSC),
    usage("SystemMenuSelect", 0x89, OSC),
    usage("SystemMenuRight", 0x8A, RTC),
    usage("SystemMenuLeft", 0x8B, RTC),
    usage("SystemMenuUp", 0x8C, RTC),
    usage("SystemMenuDown", 0x8D, RTC),
    usage("SystemColdRestart", 0x8E, OSC),
    usage("SystemWarmRestart", 0x8F, OSC),
    usage("DpadUp", 0x90, OOC),
    usage("DpadDown", 0x91, OOC),
    usage("DpadRight", 0x92, OOC),
    usage("DpadLeft", 0x93, OOC),
    usage("IndexTrigger", 0x94, MC | DV),
    usage("PalmTrigger", 0x95, MC | DV),
    usage("Thumbstick", 0x96, CP),
    usage("SystemFunctionShift", 0x97, MC),
    usage("SystemFunctionShiftLock", 0x98, OOC),
    usage("SystemFunctionShiftLockIndicator", 0x99, DV),
    usage("SystemDismissNotification", 0x9A, OSC),
    usage("SystemDoNotDisturb", 0x9B, OOC),
    usage("SystemDock", 0xA0, OSC),
    usage("SystemUndock", 0xA1, OSC),
    usage("SystemSetup", 0xA2, OSC),
    usage("SystemBreak", 0xA3, OSC),
    usage("SystemDebuggerBreak", 0xA4, OSC),
    usage("ApplicationBreak", 0xA5, OSC),
    usage("ApplicationDebuggerBreak", 0xA6, OSC),
    usage("SystemSpeakerMute", 0xA7, OSC),
    usage("SystemHibernate", 0xA8, OSC),
    usage("SystemDisplayInvert", 0xB0, OSC),
    usage("SystemDisplayInternal", 0xB1, OSC),
    usage("SystemDisplayExternal", 0xB2, OSC),
    usage("SystemDisplayBoth", 0xB3, OSC),
    usage("SystemDisplayDual", 0xB4, OSC),
    usage("SystemDisplayToggleIntExtMode", 0xB5, OSC),
    usage("SystemDisplaySwapPrimarySecondary", 0xB6, OSC),
    usage("SystemDisplayToggleLcdAutoscale", 0xB7, OSC),
    usage("SensorZone", 0xC0, CL),
    usage("Rpm", 0xC1, DV),
    usage("CoolantLevel", 0xC2, DV),
    usage("CoolantCriticalLevel", 0xC3, SV),
    usage("CoolantPump", 0xC4, US),
    usage("ChassisEnclosure", 0xC5, CL),
    usage("WirelessRadioButton", 0xC6, OOC),
    usage("WirelessRadioLed", 0xC7, OOC),
    usage("WirelessRadioSliderSwitch", 0xC8, OOC),
    usage("SystemDisplayRotationLockButton", 0xC9, OOC),
    usage("SystemDisplayRotationLockSliderSwitch", 0xCA, OOC),
    usage("ControlEnable", 0xCB, DF),
    usage("DockableDeviceUniqueId", 0xD0, DV),
    usage("DockableDeviceVendorId", 0xD1, DV),
    usage("DockableDevicePrimaryUsagePage", 0xD2, DV),
    usage("DockableDevicePrimaryUsageId", 0xD3, DV),
    usage("DockableDeviceDockingState", 0xD4, DF),
    usage("DockableDeviceDisplayOcclusion", 0xD5, CL),
    usage("DockableDeviceObjectType", 0xD6, DV),
];

/// Simulation Controls page, HID Usage Tables 1.2 ch. 5.
pub(crate) const SIMULATION_CONTROLS: &[Entry] = &[
    usage("FlighSimulationDevice", 0x01, CA),
    usage("AutomobileSimulationDevice", 0x02, CA),
    usage("TankSimulationDevice", 0x03, CA),
    usage("SpaceshipSimulationDevice", 0x04, CA),
    usage("SubmarineSimulationDevice", 0x05, CA),
    usage("SailingSimulationDevice", 0x06, CA),
    usage("MotorcycleSimiulationDevice", 0x07, CA),
    usage("SportsSimulationDevice", 0x08, CA),
    usage("AirplaneSimulationDevice", 0x09, CA),
    usage("HelicopterSimulationDevice", 0x0A, CA),
    usage("MagicCarpetSimulationDevice", 0x0B, CA),
    usage("BicycleSimulationDevice", 0x0C, CA),
    usage("FlightControlStick", 0x20, CA),
    usage("FlightStick", 0x21, CA),
    usage("CyclicControl", 0x22, CP),
    usage("CyclicTrim", 0x23, CP),
    usage("FlightYoke", 0x24, CA),
    usage("TrackControl", 0x25, CP),
    usage("Aileron", 0xB0, DV),
    usage("AileronTrim", 0xB1, DV),
    usage("AntiTorqueControl", 0xB2, DV),
    usage("AutopilotEnable", 0xB3, OOC),
    usage("ChaffRelease", 0xB4, OSC),
    usage("CollectiveControl", 0xB5, DV),
    usage("DiveBrake", 0xB6, DV),
    usage("ElectronicCountermeasures", 0xB7, OOC),
    usage("Elevator", 0xB8, DV),
    usage("ElevatorTrim", 0xB9, DV),
    usage("Rudder", 0xBA, DV),
    usage("Throttle", 0xBB, DV),
    usage("FlightCommunications", 0xBC, OOC),
    usage("FlareRelease", 0xBD, OSC),
    usage("LandingGear", 0xBE, OOC),
    usage("ToeBrake", 0xBF, DV),
    usage("Trigger", 0xC0, MC),
    usage("WeaponsArm", 0xC1, OOC),
    usage("WeaponsSelect", 0xC2, OSC),
    usage("WingFlaps", 0xC3, DV),
    usage("Accelerator", 0xC4, DV),
    usage("Brake", 0xC5, DV),
    usage("Clutch", 0xC6, DV),
    usage("Shifter", 0xC7, DV),
    usage("Steering", 0xC8, DV),
    usage("TurretDirection", 0xC9, DV),
    usage("BarrelElevation", 0xCA, DV),
    usage("DivePlane", 0xCB, DV),
    usage("Ballast", 0xCC, DV),
    usage("BicycleCrank", 0xCD, DV),
    usage("HandleBars", 0xCE, DV),
    usage("FrontBrake", 0xCF, DV),
    usage("RearBrake", 0xD0, DV),
];

/// VR Controls page, HID Usage Tables 1.2 ch. 6.
pub(crate) const VR_CONTROLS: &[Entry] = &[
    usage("Belt", 0x01, CA),
    usage("BodySuit", 0x02, CA),
    usage("Flexor", 0x03, CP),
    usage("Grove", 0x04, CA),
    usage("HeadTracker", 0x05, CP),
    usage("HeadMountedDisplay", 0x06, CA),
    usage("HandTracker", 0x07, CA),
    usage("Oculometer", 0x08, CA),
    usage("Vest", 0x09, CA),
    usage("AnimatronicDevice", 0x0A, CA),
    usage("StereoEnable", 0x20, OOC),
    usage("DisplayEnable", 0x21, OOC),
];

/// Sport Controls page, HID Usage Tables 1.2 ch. 7.
pub(crate) const SPORT_CONTROLS: &[Entry] = &[
    usage("BaseballBat", 0x01, CA),
    usage("GolfBat", 0x02, CA),
    usage("RowingMachine", 0x03, CA),
    usage("Treadmill", 0x04, CA),
    usage("Oar", 0x30, DV),
    usage("Slope", 0x31, DV),
    usage("Rate", 0x32, DV),
    usage("StickSpeed", 0x33, DV),
    usage("StickFaceAngle", 0x34, DV),
    usage("StickHeelToe", 0x35, DV),
    usage("StickFollowThrough", 0x36, DV),
    usage("StickTempo", 0x37, DV),
    usage("StickType", 0x38, NARY),
    usage("StickHeight", 0x39, DV),
    usage("Putter", 0x50, SEL),
    usage("Iron1", 0x51, SEL),
    usage("Iron2", 0x52, SEL),
    usage("Iron3", 0x53, SEL),
    usage("Iron4", 0x54, SEL),
    usage("Iron5", 0x55, SEL),
    usage("Iron6", 0x56, SEL),
    usage("Iron7", 0x57, SEL),
    usage("Iron8", 0x58, SEL),
    usage("Iron9", 0x59, SEL),
    usage("Iron10", 0x5A, SEL),
    usage("Iron11", 0x5B, SEL),
    usage("SandWedge", 0x5C, SEL),
    usage("LoftWedge", 0x5D, SEL),
    usage("PowerWedge", 0x5E, SEL),
    usage("Wood1", 0x5F, SEL),
    usage("Wood3", 0x60, SEL),
    usage("Wood5", 0x61, SEL),
    usage("Wood7", 0x62, SEL),
    usage("Wood9", 0x63, SEL),
];

/// Game Controls page, HID Usage Tables 1.2 ch. 8.
pub(crate) const GAME_CONTROLS: &[Entry] = &[
    usage("3dGameController", 0x01, CA),
    usage("PinballDevice", 0x02, CA),
    usage("GunDevice", 0x03, CA),
    usage("PointOfView", 0x20, CP),
    usage("TurnRightLeft", 0x21, DV),
    usage("PitchForwardBackward", 0x22, DV),
    usage("RollRightLeft", 0x23, DV),
    usage("MoveRightLeft", 0x24, DV),
    usage("MoveForwardBackward", 0x25, DV),
    usage("MoveUpDown", 0x26, DV),
    usage("LeanRightLeft", 0x27, DV),
    usage("LeanForwardBackward", 0x28, DV),
    usage("HeightOfPov", 0x29, DV),
    usage("Flipper", 0x2A, MC),
    usage("SecondaryFlipper", 0x2B, MC),
    usage("Bump", 0x2C, MC),
    usage("NewGame", 0x2D, OSC),
    usage("ShootBall", 0x2E, OSC),
    usage("Player", 0x2F, OSC),
    usage("GunBolt", 0x30, OOC),
    usage("GunClip", 0x31, OOC),
    usage("GunSelector", 0x32, NARY),
    usage("GunSingleShot", 0x33, SEL),
    usage("GunBurst", 0x34, SEL),
    usage("GunAutomatic", 0x35, SEL),
    usage("GunSafety", 0x36, OOC),
    usage("GamepadFireJump", 0x37, CL),
    usage("GamepadTrigger", 0x39, CL),
    usage("FormFittingGamepad", 0x3A, SF),
];

/// Generic Device Controls page, HID Usage Tables 1.2 ch. 9.
pub(crate) const GENERIC_DEVICE_CONTROLS: &[Entry] = &[
    usage("BackgroundNonuserControls", 0x06, CA),
    usage("BatteryStrength", 0x20, DV),
    usage("WirelessChannel", 0x21, DV),
    usage("WirelessId", 0x22, DV),
    usage("DiscoverWirelessControl", 0x23, OSC),
    usage("SecurityCodeCharacterEntered", 0x24, OSC),
    usage("SecurityCodeCharacterErased", 0x25, OSC),
    usage("SecurityCodeCleared", 0x26, OSC),
    usage("SequenceId", 0x27, DV),
    usage("SequenceIdReset", 0x28, DF),
    usage("RfSignalStrength", 0x29, DV),
    usage("SofwareVersion", 0x2A, CL),
    usage("ProtocolVersion", 0x2B, CL),
    usage("HardwareVersion", 0x2C, CL),
    usage("Major", 0x2D, SV),
    usage("Minor", 0x2E, SV),
    usage("Revision", 0x2F, SV),
    usage("Handedness", 0x30, NARY),
    usage("EitherHand", 0x31, SEL),
    usage("LeftHand", 0x32, SEL),
    usage("RightHand", 0x33, SEL),
    usage("BothHands", 0x34, SEL),
    usage("GripPoseOffset", 0x40, CP),
    usage("PointerPoseOffset", 0x41, CP),
];

/// Keyboard/Keypad page, HID Usage Tables 1.2 ch. 10.
pub(crate) const KEYBOARD: &[Entry] = &[
    usage("NoEventIndicated", 0x00, SEL),
    usage("KeyboardErrorRollOver", 0x01, SEL),
    usage("KeyboardPostFail", 0x02, SEL),
    usage("KeyboardErrorUndefined", 0x03, SEL),
    usage("KeyboardA", 0x04, SEL),
    usage("KeyboardB", 0x05, SEL),
    usage("KeyboardC", 0x06, SEL),
    usage("KeyboardD", 0x07, SEL),
    usage("KeyboardE", 0x08, SEL),
    usage("KeyboardF", 0x09, SEL),
    usage("KeyboardG", 0x0A, SEL),
    usage("KeyboardH", 0x0B, SEL),
    usage("KeyboardI", 0x0C, SEL),
    usage("KeyboardJ", 0x0D, SEL),
    usage("KeyboardK", 0x0E, SEL),
    usage("KeyboardL", 0x0F, SEL),
    usage("KeyboardM", 0x10, SEL),
    usage("KeyboardN", 0x11, SEL),
    usage("KeyboardO", 0x12, SEL),
    usage("KeyboardP", 0x13, SEL),
    usage("KeyboardQ", 0x14, SEL),
    usage("KeyboardR", 0x15, SEL),
    usage("KeyboardS", 0x16, SEL),
    usage("KeyboardT", 0x17, SEL),
    usage("KeyboardU", 0x18, SEL),
    usage("KeyboardV", 0x19, SEL),
    usage("KeyboardW", 0x1A, SEL),
    usage("KeyboardX", 0x1B, SEL),
    usage("KeyboardY", 0x1C, SEL),
    usage("KeyboardZ", 0x1D, SEL),
    usage("Keyboard1", 0x1E, SEL),
    usage("Keyboard2", 0x1F, SEL),
    usage("Keyboard3", 0x20, SEL),
    usage("Keyboard4", 0x21, SEL),
    usage("Keyboard5", 0x22, SEL),
    usage("Keyboard6", 0x23, SEL),
    usage("Keyboard7", 0x24, SEL),
    usage("Keyboard8", 0x25, SEL),
    usage("Keyboard9", 0x26, SEL),
    usage("Keyboard0", 0x27, SEL),
    usage("KeyboardEnter", 0x28, SEL),
    usage("KeyboardEscape", 0x29, SEL),
    usage("KeyboardDelete", 0x2A, SEL),
    usage("KeyboardTab", 0x2B, SEL),
    usage("KeyboardSpacebar", 0x2C, SEL),
    usage("KeyboardMinus", 0x2D, SEL),
    usage("KeyboardEqual", 0x2E, SEL),
    usage("KeyboardCurlyBracketOpen", 0x2F, SEL),
    usage("KeyboardCurlyBracketClose", 0x30, SEL),
    usage("KeyboardBackslash", 0x31, SEL),
    usage("KeyboardNonUsHash", 0x32, SEL),
    usage("KeyboardColon", 0x33, SEL),
    usage("KeyboardApostrophe", 0x34, SEL),
    usage("KeyboardGraveAccentAndTilde", 0x35, SEL),
    usage("KeyboardComma", 0x36, SEL),
    usage("KeyboardPoint", 0x37, SEL),
    usage("KeyboardSlash", 0x38, SEL),
    usage("KeyboardCapsLock", 0x39, SEL),
    usage("KeyboardF1", 0x3A, SEL),
    usage("KeyboardF2", 0x3B, SEL),
    usage("KeyboardF3", 0x3C, SEL),
    usage("KeyboardF4", 0x3D, SEL),
    usage("KeyboardF5", 0x3E, SEL),
    usage("KeyboardF6", 0x3F, SEL),
    usage("KeyboardF7", 0x40, SEL),
    usage("KeyboardF8", 0x41, SEL),
    usage("KeyboardF9", 0x42, SEL),
    usage("KeyboardF10", 0x43, SEL),
    usage("KeyboardF11", 0x44, SEL),
    usage("KeyboardF12", 0x45, SEL),
    usage("KeyboardPrintScreen", 0x46, SEL),
    usage("KeyboardScrollLock", 0x47, SEL),
    usage("KeyboardPause", 0x48, SEL),
    usage("KeyboardInsert", 0x49, SEL),
    usage("KeyboardHome", 0x4A, SEL),
    usage("KeyboardPageUp", 0x4B, SEL),
    usage("KeyboardDeleteForward", 0x4C, SEL),
    usage("KeyboardEnd", 0x4D, SEL),
    usage("KeyboardPageDown", 0x4E, SEL),
    usage("KeyboardRightArrow", 0x4F, SEL),
    usage("KeyboardLeftArrow", 0x50, SEL),
    usage("KeyboardDownArrow", 0x51, SEL),
    usage("KeyboardUpArrow", 0x52, SEL),
    usage("KeypadNumLockAndClear", 0x53, SEL),
    usage("KeypadDivide", 0x54, SEL),
    usage("KeypadMultiply", 0x55, SEL),
    usage("KeypadMinus", 0x56, SEL),
    usage("KeypadPlus", 0x57, SEL),
    usage("KeypadEnter", 0x58, SEL),
    usage("Keypad1", 0x59, SEL),
    usage("Keypad2", 0x5A, SEL),
    usage("Keypad3", 0x5B, SEL),
    usage("Keypad4", 0x5C, SEL),
    usage("Keypad5", 0x5D, SEL),
    usage("Keypad6", 0x5E, SEL),
    usage("Keypad7", 0x5F, SEL),
    usage("Keypad8", 0x60, SEL),
    usage("Keypad9", 0x61, SEL),
    usage("Keypad0", 0x62, SEL),
    usage("KeypadPoint", 0x63, SEL),
    usage("KeyboardNonUsBackslash", 0x64, SEL),
    usage("KeyboardApplication", 0x65, SEL),
    usage("KeyboardPower", 0x66, SEL),
    usage("KeyboardEqual", 0x67, SEL),
    usage("KeyboardF13", 0x68, SEL),
    usage("KeyboardF14", 0x69, SEL),
    usage("KeyboardF15", 0x6A, SEL),
    usage("KeyboardF16", 0x6B, SEL),
    usage("KeyboardF17", 0x6C, SEL),
    usage("KeyboardF18", 0x6D, SEL),
    usage("KeyboardF19", 0x6E, SEL),
    usage("KeyboardF20", 0x6F, SEL),
    usage("KeyboardF21", 0x70, SEL),
    usage("KeyboardF22", 0x71, SEL),
    usage("KeyboardF23", 0x72, SEL),
    usage("KeyboardF24", 0x73, SEL),
    usage("KeyboardExecute", 0x74, SEL),
    usage("KeyboardHelp", 0x75, SEL),
    usage("KeyboardMenu", 0x76, SEL),
    usage("KeyboardSelect", 0x77, SEL),
    usage("KeyboardStop", 0x78, SEL),
    usage("KeyboardAgain", 0x79, SEL),
    usage("KeyboardUndo", 0x7A, SEL),
    usage("KeyboardCut", 0x7B, SEL),
    usage("KeyboardCopy", 0x7C, SEL),
    usage("KeyboardPaste", 0x7D, SEL),
    usage("KeyboardFind", 0x7E, SEL),
    usage("KeyboardMute", 0x7F, SEL),
    usage("KeyboardVolumeUp", 0x80, SEL),
    usage("KeyboardVolumeDown", 0x81, SEL),
    usage("KeyboardLockingCapsLock", 0x82, SEL),
    usage("KeyboardLockingNumLock", 0x83, SEL),
    usage("KeyboardLockingScrollLock", 0x84, SEL),
    usage("KeypadComma", 0x85, SEL),
    usage("KeypadEqual", 0x86, SEL),
    usage("KeyboardInternational1", 0x87, SEL),
    usage("KeyboardInternational2", 0x88, SEL),
    usage("KeyboardInternational3", 0x89, SEL),
    usage("KeyboardInternational4", 0x8A, SEL),
    usage("KeyboardInternational5", 0x8B, SEL),
    usage("KeyboardInternational6", 0x8C, SEL),
    usage("KeyboardInternational7", 0x8D, SEL),
    usage("KeyboardInternational8", 0x8E, SEL),
    usage("KeyboardInternational9", 0x8F, SEL),
    usage("KeyboardLang1", 0x90, SEL),
    usage("KeyboardLang2", 0x91, SEL),
    usage("KeyboardLang3", 0x92, SEL),
    usage("KeyboardLang4", 0x93, SEL),
    usage("KeyboardLang5", 0x94, SEL),
    usage("KeyboardLang6", 0x95, SEL),
    usage("KeyboardLang7", 0x96, SEL),
    usage("KeyboardLang8", 0x97, SEL),
    usage("KeyboardLang9", 0x98, SEL),
    usage("KeyboardAlternateErase", 0x99, SEL),
    usage("KeyboardSysReqAttention", 0x9A, SEL),
    usage("KeyboardCancel", 0x9B, SEL),
    usage("KeyboardClear", 0x9C, SEL),
    usage("KeyboardPrior", 0x9D, SEL),
    usage("KeyboardReturn", 0x9E, SEL),
    usage("KeyboardSeparator", 0x9F, SEL),
    usage("KeyboardOut", 0xA0, SEL),
    usage("KeyboardOper", 0xA1, SEL),
    usage("KeyboardClearAgain", 0xA2, SEL),
    usage("KeyboardCrSelProps", 0xA3, SEL),
    usage("KeyboardExSel", 0xA4, SEL),
    usage("Keypad00", 0xB0, SEL),
    usage("Keypad000", 0xB1, SEL),
    usage("ThausendsSeparator", 0xB2, SEL),
    usage("DecimalSeparator", 0xB3, SEL),
    usage("CurrencyUnit", 0xB4, SEL),
    usage("CurrencySubUnit", 0xB5, SEL),
    usage("KeypadBracketOpen", 0xB6, SEL),
    usage("KeypadBracketClose", 0xB7, SEL),
    usage("KeypadCurlyBracketOpen", 0xB8, SEL),
    usage("KeypadCurlyBracketClose", 0xB9, SEL),
    usage("KeypadTab", 0xBA, SEL),
    usage("KeypadBackspace", 0xBB, SEL),
    usage("KeypadA", 0xBC, SEL),
    usage("KeypadB", 0xBD, SEL),
    usage("KeypadC", 0xBE, SEL),
    usage("KeypadD", 0xBF, SEL),
    usage("KeypadE", 0xC0, SEL),
    usage("KeypadF", 0xC1, SEL),
    usage("KeypadXor", 0xC2, SEL),
    usage("KeypadCircumflex", 0xC3, SEL),
    usage("KeypadPercent", 0xC4, SEL),
    usage("KeypadLessThan", 0xC5, SEL),
    usage("KeypadGreaterThan", 0xC6, SEL),
    usage("KeypadAmpersand", 0xC7, SEL),
    usage("KeypadDoubleAmpersand", 0xC8, SEL),
    usage("KeypadVerticalBar", 0xC9, SEL),
    usage("KeypadDoubleVerticalBar", 0xCA, SEL),
    usage("KeypadColon", 0xCB, SEL),
    usage("KeypadHash", 0xCC, SEL),
    usage("KeypadSpace", 0xCD, SEL),
    usage("KeypadAtSign", 0xCE, SEL),
    usage("KeypadExclamationMark", 0xCF, SEL),
    usage("KeypadMemoryStore", 0xD0, SEL),
    usage("KeypadMemoryRecall", 0xD1, SEL),
    usage("KeypadMemoryClear", 0xD2, SEL),
    usage("KeypadMemoryAdd", 0xD3, SEL),
    usage("KeypadMemorySubtract", 0xD4, SEL),
    usage("KeypadMemoryMultiply", 0xD5, SEL),
    usage("KeypadMemoryDivide", 0xD6, SEL),
    usage("KeypadPlusMinus", 0xD7, SEL),
    usage("KeypadClear", 0xD8, SEL),
    usage("KeypadClearEntry", 0xD9, SEL),
    usage("KeypadBinary", 0xDA, SEL),
    usage("KeypadOctal", 0xDB, SEL),
    usage("KeypadDecimal", 0xDC, SEL),
    usage("KeypadHexadecimal", 0xDD, SEL),
    usage("KeyboardLeftControl", 0xE0, DV),
    usage("KeyboardLeftShift", 0xE1, DV),
    usage("KeyboardLeftAlt", 0xE2, DV),
    usage("KeyboardLeftGui", 0xE3, DV),
    usage("KeyboardRightControl", 0xE4, DV),
    usage("KeyboardRightShift", 0xE5, DV),
    usage("KeyboardRightAlt", 0xE6, DV),
    usage("KeyboardRightGui", 0xE7, DV),
];

/// LED page, HID Usage Tables 1.2 ch. 11.
pub(crate) const LED: &[Entry] = &[
    usage("NumLock", 0x01, OOC),
    usage("CapsLock", 0x02, OOC),
    usage("ScrollLock", 0x03, OOC),
    usage("Compose", 0x04, OOC),
    usage("Kana", 0x05, OOC),
    usage("Power", 0x06, OOC),
    usage("Shift", 0x07, OOC),
    usage("DoNotDisturb", 0x08, OOC),
    usage("Mute", 0x09, OOC),
    usage("ToneEnable", 0x0A, OOC),
    usage("HighCutFilter", 0x0B, OOC),
    usage("LowCutFitler", 0x0C, OOC),
    usage("EqualizerEnable", 0x0D, OOC),
    usage("SoundFieldOn", 0x0E, OOC),
    usage("SurroundOn", 0x0F, OOC),
    usage("Repeat", 0x10, OOC),
    usage("Stereo", 0x11, OOC),
    usage("SamplingRateDetect", 0x12, OOC),
    usage("Spinning", 0x13, OOC),
    usage("Cav", 0x14, OOC),
    usage("Clv", 0x15, OOC),
    usage("RecordingFormatDetect", 0x16, OOC),
    usage("OffHook", 0x17, OOC),
    usage("Ring", 0x18, OOC),
    usage("MessageWaiting", 0x19, OOC),
    usage("DataMode", 0x1A, OOC),
    usage("BatteryOperation", 0x1B, OOC),
    usage("BatteryOk", 0x1C, OOC),
    usage("BatteryLow", 0x1D, OOC),
    usage("Speaker", 0x1E, OOC),
    usage("HeadSet", 0x1F, OOC),
    usage("Hold", 0x20, OOC),
    usage("Microphone", 0x21, OOC),
    usage("Coverage", 0x22, OOC),
    usage("NightMode", 0x23, OOC),
    usage("SendCalls", 0x24, OOC),
    usage("CallPickup", 0x25, OOC),
    usage("Conference", 0x26, OOC),
    usage("Standby", 0x27, OOC),
    usage("CameraOn", 0x28, OOC),
    usage("CameraOff", 0x29, OOC),
    usage("OnLine", 0x2A, OOC),
    usage("OffLine", 0x2B, OOC),
    usage("Busy", 0x2C, OOC),
    usage("Ready", 0x2D, OOC),
    usage("PaperOut", 0x2E, OOC),
    usage("PaperJam", 0x2F, OOC),
    usage("Remote", 0x30, OOC),
    usage("Forward", 0x31, OOC),
    usage("Reverse", 0x32, OOC),
    usage("Stop", 0x33, OOC),
    usage("Rewind", 0x34, OOC),
    usage("FastForward", 0x35, OOC),
    usage("Play", 0x36, OOC),
    usage("Pause", 0x37, OOC),
    usage("Record", 0x38, OOC),
    usage("Error", 0x39, OOC),
    usage("UsageSelectedIndicator", 0x3A, US),
    usage("UsageInUseIndicator", 0x3B, US),
    usage("UsageMultiModeIndicator", 0x3C, UM),
    usage("IndicatorOn", 0x3D, SEL),
    usage("IndicatorFlash", 0x3E, SEL),
    usage("IndicatorSlowBlink", 0x3F, SEL),
    usage("IndicatorFastBlink", 0x40, SEL),
    usage("IndicatorOff", 0x41, SEL),
    usage("FlashOnTime", 0x42, DV),
    usage("SlowBlinkOnTime", 0x43, DV),
    usage("SlowBlinkOffTime", 0x44, DV),
    usage("FastBlinkOnTime", 0x45, DV),
    usage("FastBlinkOffTime", 0x46, DV),
    usage("UsageIndicatorColor", 0x47, UM),
    usage("IndicatorRed", 0x48, SEL),
    usage("IndicatorGreen", 0x49, SEL),
    usage("IndicatorAmber", 0x4A, SEL),
    usage("GenericIndicator", 0x4B, OOC),
    usage("SystemSyspend", 0x4C, OOC),
    usage("ExternalPowerConnected", 0x4D, OOC),
    usage("IndicatorBlue", 0x4E, SEL),
    usage("IndicatorOrange", 0x4F, SEL),
    usage("GoodStatus", 0x50, OOC),
    usage("WarningStatus", 0x51, OOC),
    usage("RgbLed", 0x52, CL),
    usage("RedLedChannel", 0x53, DV),
    usage("BlueLedChannel", 0x54, DV),
    usage("GreenLedChannel", 0x55, DV),
    usage("LedIntensity", 0x56, DV),
    usage("PlayerIndicator", 0x60, NARY),
    usage("Player1", 0x61, SEL),
    usage("Player2", 0x62, SEL),
    usage("Player3", 0x63, SEL),
    usage("Player4", 0x64, SEL),
    usage("Player5", 0x65, SEL),
    usage("Player6", 0x66, SEL),
    usage("Player7", 0x67, SEL),
    usage("Player8", 0x68, SEL),
];

/// Button page, HID Usage Tables 1.2 ch. 12.
pub(crate) const BUTTON: &[Entry] = &[
    usage("NoButtonPressed", 0x00, SEL | OOC | MC | OSC),
    // Button1 through Button65535
    usage("Button#", 0x01, SEL | OOC | MC | OSC),
    usage("Button#", 0xFFFF, SEL | OOC | MC | OSC),
];

/// Ordinal page, HID Usage Tables 1.2 ch. 13.
pub(crate) const ORDINAL: &[Entry] = &[
    // Instance1 through Instance65535
    usage("Instance#", 0x01, UM),
    usage("Instance#", 0xFFFF, UM),
];

/// Telephony Device page, HID Usage Tables 1.2 ch. 14.
pub(crate) const TELEPHONY_DEVICE: &[Entry] = &[
    usage("Phone", 0x01, CA),
    usage("AnsweringMachine", 0x02, CA),
    usage("MessageControls", 0x03, CL),
    usage("Handset", 0x04, CL),
    usage("Headset", 0x05, CL),
    usage("TelephonyKeyPad", 0x06, NARY),
    usage("ProgrammableButton", 0x07, NARY),
    usage("HookSwitch", 0x20, OOC),
    usage("Flash", 0x21, MC),
    usage("Feature", 0x22, OSC),
    usage("Hold", 0x23, OOC),
    usage("Radial", 0x24, OSC),
    usage("Transfer", 0x25, OSC),
    usage("Drop", 0x26, OSC),
    usage("Park", 0x27, OOC),
    usage("ForwardCalls", 0x28, OOC),
    usage("AlternateFunction", 0x29, MC),
    usage("Line", 0x2A, OSC | NARY),
    usage("SpeakerPhone", 0x2B, OOC),
    usage("Conference", 0x2C, OOC),
    usage("RingEnable", 0x2D, OOC),
    usage("RingSelect", 0x2E, OSC),
    usage("PhoneMute", 0x2F, OOC),
    usage("CallerId", 0x30, MC),
    usage("Send", 0x31, OOC),
    usage("SpeedDial", 0x50, OSC),
    usage("StoreNumber", 0x51, OSC),
    usage("RecallNumber", 0x52, OSC),
    usage("PhoneDirectory", 0x53, OOC),
    usage("VoiceMail", 0x70, OOC),
    usage("ScreenCalls", 0x71, OOC),
    usage("DoNotDisturb", 0x72, OOC),
    usage("Message", 0x73, OSC),
    usage("AnswerOnOff", 0x74, OOC),
    usage("InsideDialTone", 0x90, MC),
    usage("OutsideDialTone", 0x91, MC),
    usage("InsideRingTone", 0x92, MC),
    usage("OutsideRingTone", 0x93, MC),
    usage("PriorityRingTone", 0x94, MC),
    usage("InsideRingback", 0x95, MC),
    usage("PriorityRingback", 0x96, MC),
    usage("LineBusyTone", 0x97, MC),
    usage("ReorderTone", 0x98, MC),
    usage("CallWaitingTone", 0x99, MC),
    usage("ConfirmationTone1", 0x9A, MC),
    usage("ConfirmationTone2", 0x9B, MC),
    usage("TonesOff", 0x9C, OOC),
    usage("OutsideRingback", 0x9D, MC),
    usage("Ringer", 0x9E, OOC),
    usage("PhoneKey0", 0xB0, SEL),
    usage("PhoneKey1", 0xB1, SEL),
    usage("PhoneKey2", 0xB2, SEL),
    usage("PhoneKey3", 0xB3, SEL),
    usage("PhoneKey4", 0xB4, SEL),
    usage("PhoneKey5", 0xB5, SEL),
    usage("PhoneKey6", 0xB6, SEL),
    usage("PhoneKey7", 0xB7, SEL),
    usage("PhoneKey8", 0xB8, SEL),
    usage("PhoneKey9", 0xB9, SEL),
    usage("PhoneKeyStar", 0xBA, SEL),
    usage("PhoneKeyPound", 0xBB, SEL),
    usage("PhoneKeyA", 0xBC, SEL),
    usage("PhoneKeyB", 0xBD, SEL),
    usage("PhoneKeyC", 0xBE, SEL),
    usage("PhoneKeyD", 0xBF, SEL),
    usage("PhoneCallHistoryKey", 0xC0, SEL),
    usage("PhoneCallerIdKey", 0xC1, SEL),
    usage("PhoneSettingsKey", 0xC2, SEL),
    usage("HostControl", 0xF0, OOC),
    usage("HostAvailable", 0xF1, OOC),
    usage("HostCallActive", 0xF2, OOC),
    usage("ActivateHandsetAudio", 0xF3, OOC),
    usage("RingType", 0xF4, NARY),
    usage("RediablePhoneNumber", 0xF5, OOC),
    usage("StopRingTone", 0xF8, SEL),
    usage("PstnRingTone", 0xF9, SEL),
    usage("HostRingTone", 0xFA, SEL),
    usage("AlertSoundError", 0xFB, SEL),
    usage("AlertSoundConfirm", 0xFC, SEL),
    usage("AlertSoundNotification", 0xFD, SEL),
    usage("SilentRing", 0xFE, SEL),
    usage("EmailMessageWaiting", 0x108, OOC),
    usage("VoicemailMessageWaiting", 0x109, OOC),
    usage("HostHold", 0x10A, OOC),
    usage("IncomingCallHistoryCount", 0x110, DV),
    usage("OutgoingCallHistoryCount", 0x111, DV),
    usage("IncomingCallHistory", 0x112, CL),
    usage("OutgoingCallHistory", 0x113, CL),
    usage("PhoneLocale", 0x114, DV),
    usage("PhoneTimeSecond", 0x140, DV),
    usage("PhoneTimeMinute", 0x141, DV),
    usage("PhoneTimeHour", 0x142, DV),
    usage("PhoneTimeDay", 0x143, DV),
    usage("PhoneTimeMonth", 0x144, DV),
    usage("PhoneTimeYear", 0x145, DV),
    usage("HandsetNickname", 0x146, DV),
    usage("AddressBookId", 0x147, DV),
    usage("CallDuration", 0x14A, DV),
    usage("DualModePhone", 0x14B, CA),
];

/// Consumer page, HID Usage Tables 1.2 ch. 15.
pub(crate) const CONSUMER: &[Entry] = &[
    usage("ConsumerControl", 0x01, CA),
    usage("NumericKeyPad", 0x02, NARY),
    usage("ProgrammableButtons", 0x03, NARY),
    usage("Microphone", 0x04, CA),
    usage("Headphone", 0x05, CA),
    usage("GraphicEqualizer", 0x06, CA),
    usage("Plus10", 0x20, OSC),
    usage("Plus100", 0x21, OSC),
    usage("AmPm", 0x22, OSC),
    usage("Power", 0x30, OOC),
    usage("Reset", 0x31, OSC),
    usage("Sleep", 0x32, OSC),
    usage("SleepAfter", 0x33, OSC),
    usage("SleepMode", 0x34, RTC),
    usage("Illumination", 0x35, OOC),
    usage("FunctionButtons", 0x36, NARY),
    usage("Menu", 0x40, OOC),
    usage("MenuPick", 0x41, OSC),
    usage("MenuUp", 0x42, OSC),
    usage("MenuDown", 0x43, OSC),
    usage("MenuLeft", 0x44, OSC),
    usage("MenuRight", 0x45, OSC),
    usage("MenuEscape", 0x46, OSC),
    usage("MenuValueIncrease", 0x47, OSC),
    usage("MenuValueDecrease", 0x48, OSC),
    usage("DataOnScreen", 0x60, OOC),
    usage("ClosedCaption", 0x61, OOC),
    usage("ClosedCaptionSelect", 0x62, OSC),
    usage("VcrTv", 0x63, OOC),
    usage("BroadcastMode", 0x64, OSC),
    usage("Snapshot", 0x65, OSC),
    usage("Still", 0x66, OSC),
    usage("PictureInPictureToggle", 0x67, OSC),
    usage("PictureInPictureSwap", 0x68, OSC),
    usage("RedMenuButton", 0x69, MC),
    usage("GreenMenuButton", 0x6A, MC),
    usage("BlueMenuButton", 0x6B, MC),
    usage("YellowMenuButton", 0x6C, MC),
    usage("Aspect", 0x6D, OSC),
    usage("Mode3dSelect", 0x6E, OSC),
    usage("DisplayBrightnessIncrement", 0x6F, RTC),
    usage("DisplayBrightnessDecrement", 0x70, RTC),
    usage("DisplayBrightness", 0x71, LC),
    usage("DisplayBacklightToggle", 0x72, OOC),
    usage("DisplaySetBrightnessToMinimum", 0x73, OSC),
    usage("DisplaySetBrightnessToMaximum", 0x74, OSC),
    usage("DisplaySetAutoBrightness", 0x75, OOC),
    usage("CameraAccessEnabled", 0x76, OOC),
    usage("CameraAccessDisabled", 0x77, OOC),
    usage("CameraAccessToggle", 0x78, OOC),
    usage("KeyboardBrightnessIncrement", 0x79, OSC),
    usage("KeyboardBrightnessDecrement", 0x7A, OSC),
    usage("KeyboardBacklightSetLevel", 0x7B, LC),
    usage("KeyboardBacklightOoc", 0x7C, OOC),
    usage("KeyboardBacklightSetMinimum", 0x7D, OSC),
    usage("KeyboardBacklightSetMaximum", 0x7E, OSC),
    usage("KeyboardBacklightAuto", 0x7F, OOC),
    usage("Selection", 0x80, NARY),
    usage("AssignSelection", 0x81, OSC),
    usage("ModeStep", 0x82, OSC),
    usage("RecallLast", 0x83, OSC),
    usage("EnterChannel", 0x84, OSC),
    usage("OrderMovie", 0x85, OSC),
    usage("Channel", 0x86, LC),
    usage("MediaSelection", 0x87, NARY),
    usage("MediaSelectComputer", 0x88, SEL),
    usage("MediaSelectTv", 0x89, SEL),
    usage("MediaSelectWww", 0x8A, SEL),
    usage("MediaSelectDvd", 0x8B, SEL),
    usage("MediaSelectTelephone", 0x8C, SEL),
    usage("MediaSelectProgramGuide", 0x8D, SEL),
    usage("MediaSelectVideoPhone", 0x8E, SEL),
    usage("MediaSelectGames", 0x8F, SEL),
    usage("MediaSelectMessages", 0x90, SEL),
    usage("MediaSelectCd", 0x91, SEL),
    usage("MediaSelectVcr", 0x92, SEL),
    usage("MediaSelectTuner", 0x93, SEL),
    usage("Quit", 0x94, OSC),
    usage("Help", 0x95, OOC),
    usage("MediaSelectTape", 0x96, SEL),
    usage("MediaSelectCable", 0x97, SEL),
    usage("MediaSelectSatellite", 0x98, SEL),
    usage("MediaSelectSecurity", 0x99, SEL),
    usage("MediaSelectHome", 0x9A, SEL),
    usage("MediaSelectCall", 0x9B, SEL),
    usage("ChannelIncrement", 0x9C, OSC),
    usage("ChannelDecrement", 0x9D, OSC),
    usage("MediaSelectSap", 0x9E, SEL),
    usage("VcrPlus", 0xA0, OSC),
    usage("Once", 0xA1, OSC),
    usage("Daily", 0xA2, OSC),
    usage("Weekly", 0xA3, OSC),
    usage("Monthly", 0xA4, OSC),
    usage("Play", 0xB0, OOC),
    usage("Pause", 0xB1, OOC),
    usage("Record", 0xB2, OOC),
    usage("FastForward", 0xB3, OOC),
    usage("Rewind", 0xB4, OOC),
    usage("ScanNextTrack", 0xB5, OSC),
    usage("ScanPreviousTrack", 0xB6, OSC),
    usage("Stop", 0xB7, OSC),
    usage("Eject", 0xB8, OSC),
    usage("RandomPlay", 0xB9, OOC),
    usage("SelectDisc", 0xBA, NARY),
    usage("EnterDisc", 0xBB, MC),
    usage("Repeat", 0xBC, OSC),
    usage("Tracking", 0xBD, LC),
    usage("TrackNormal", 0xBE, OSC),
    usage("SlowTracking", 0xBF, LC),
    usage("FrameForward", 0xC0, RTC),
    usage("FrameBack", 0xC1, RTC),
    usage("Mark", 0xC2, OSC),
    usage("ClearMark", 0xC3, OSC),
    usage("RepeatFromMark", 0xC4, OOC),
    usage("ReturnToMark", 0xC5, OSC),
    usage("SearchMarkForward", 0xC6, OSC),
    usage("SearchMarkBackwards", 0xC7, OSC),
    usage("CounterReset", 0xC8, OSC),
    usage("ShowCounter", 0xC9, OSC),
    usage("TrackingIncrement", 0xCA, RTC),
    usage("TrackingDecrement", 0xCB, RTC),
    usage("StopEject", 0xCC, OSC),
    usage("PlayPause", 0xCD, OSC),
    usage("PlaySkip", 0xCE, OSC),
    usage("VoiceCommand", 0xCF, OSC),
    usage("InvokeCaptureInterface", 0xD0, SEL),
    usage("StartOrStopGameRecording", 0xD1, SEL),
    usage("HistoricalGameCapture", 0xD2, SEL),
    usage("CaptureGameScreenshot", 0xD3, SEL),
    usage("ShowOrHideRecordingIndicator", 0xD4, SEL),
    usage("StartOrStopMicrophoneCapture", 0xD5, SEL),
    usage("StartOrStopCameraCapture", 0xD6, SEL),
    usage("StartOrStopGameBroadcast", 0xD7, SEL),
    usage("Volume", 0xE0, LC),
    usage("Balance", 0xE1, LC),
    usage("Mute", 0xE2, OOC),
    usage("Bass", 0xE3, LC),
    usage("Treble", 0xE4, LC),
    usage("BassBoost", 0xE5, OOC),
    usage("SurroundMode", 0xE6, OSC),
    usage("Loudness", 0xE7, OOC),
    usage("Mpx", 0xE8, OOC),
    usage("VolumeIncrement", 0xE9, RTC),
    usage("VolumeDecrement", 0xEA, RTC),
    usage("SpeedSelect", 0xF0, OSC),
    usage("PlaybackSpeed", 0xF1, NARY),
    usage("StandardPlay", 0xF2, SEL),
    usage("LongPlay", 0xF3, SEL),
    usage("ExtendedPlay", 0xF4, SEL),
    usage("Slow", 0xF5, OSC),
    usage("FanEnable", 0x100, OOC),
    usage("FanSpeed", 0x101, LC),
    usage("LightEnable", 0x102, OOC),
    usage("LightIlluminationLevel", 0x103, LC),
    usage("ClimateControlEnable", 0x104, OOC),
    usage("RoomTemperature", 0x105, LC),
    usage("SecurityEnalbe", 0x106, OOC),
    usage("FireAlarm", 0x107, OSC),
    usage("PoliceAlarm", 0x108, OSC),
    usage("Proximity", 0x109, LC),
    usage("Motion", 0x10A, OSC),
    usage("DuressAlarm", 0x10B, OSC),
    usage("HoldupAlarm", 0x10C, OSC),
    usage("MedicalAlarm", 0x10D, OSC),
    usage("BalanceRight", 0x150, RTC),
    usage("BalanceLeft", 0x151, RTC),
    usage("BassIncrement", 0x152, RTC),
    usage("BassDecrement", 0x153, RTC),
    usage("TrebleIncrement", 0x154, RTC),
    usage("TrebleDecrement", 0x155, RTC),
    usage("SpeakerSystem", 0x160, CL),
    usage("ChannelLeft", 0x161, CL),
    usage("ChannelRight", 0x162, CL),
    usage("ChannelCenter", 0x163, CL),
    usage("ChannelFront", 0x164, CL),
    usage("ChannelCenterFront", 0x165, CL),
    usage("ChannelSide", 0x166, CL),
    usage("ChannelSurround", 0x167, CL),
    usage("ChannelLowFrequencyEnhancement", 0x168, CL),
    usage("ChannelTop", 0x169, CL),
    usage("ChannelUnknown", 0x16A, CL),
    usage("SubChannel", 0x170, LC),
    usage("SubChannelIncrement", 0x171, OSC),
    usage("SubChannelDecrement", 0x172, OSC),
    usage("AlternateAudioIncrement", 0x173, OSC),
    usage("AlternateAudioDecrement", 0x174, OSC),
    usage("ApplicationLaunchButtons", 0x180, NARY),
    usage("AlLaunchButtonConfigurationTool", 0x181, SEL),
    usage("AlProgrammableButtonConfiguration", 0x182, SEL),
    usage("AlConsumerControlConfiguration", 0x183, SEL),
    usage("AlWordProcessor", 0x184, SEL),
    usage("AlTextEditor", 0x185, SEL),
    usage("AlSpreadsheet", 0x186, SEL),
    usage("AlGraphicsEditor", 0x187, SEL),
    usage("AlPresentationApp", 0x188, SEL),
    usage("AlDatabaseApp", 0x189, SEL),
    usage("AlEmailReader", 0x18A, SEL),
    usage("AlNewsreader", 0x18B, SEL),
    usage("AlVoicemail", 0x18C, SEL),
    usage("AlContactsAddressBook", 0x18D, SEL),
    usage("AlCalenderSchedule", 0x18E, SEL),
    usage("AlTaskProjectManager", 0x18F, SEL),
    usage("AlLogJournalTimecard", 0x190, SEL),
    usage("AlCheckbookFinance", 0x191, SEL),
    usage("AlCalculator", 0x192, SEL),
    usage("AlAvCapturePlayback", 0x193, SEL),
    usage("AlLocalMachineBrowser", 0x194, SEL),
    usage("AlLanWanBrowser", 0x195, SEL),
    usage("AlInternetBrowser", 0x196, SEL),
    usage("AlRemoteNetworkingIspConnect", 0x197, SEL),
    usage("AlNetworkConference", 0x198, SEL),
    usage("AlNetworkChat", 0x199, SEL),
    usage("AlTelephonyDialer", 0x19A, SEL),
    usage("AlLogon", 0x19B, SEL),
    usage("AlLogoff", 0x19C, SEL),
    usage("AlLogonLogoff", 0x19D, SEL),
    usage("AlTerminalLockScreensaver", 0x19E, SEL),
    usage("AlControlPanel", 0x19F, SEL),
    usage("AlCommandLineProcessorRun", 0x1A0, SEL),
    usage("AlProcessTaskManager", 0x1A1, SEL),
    usage("AlSelectTaskApplication", 0x1A2, SEL),
    usage("AlNextTaskApplication", 0x1A3, SEL),
    usage("AlPreviousTaskApplication", 0x1A4, SEL),
    usage("AlPreemptiveHaltTaskApplication", 0x1A5, SEL),
    usage("AlIntegratedHelpCenter", 0x1A6, SEL),
    usage("AlDocuments", 0x1A7, SEL),
    usage("AlThesaurus", 0x1A8, SEL),
    usage("AlDictionary", 0x1A9, SEL),
    usage("AlDesktop", 0x1AA, SEL),
    usage("AlSpellCheck", 0x1AB, SEL),
    usage("AlGrammarCheck", 0x1AC, SEL),
    usage("AlWirelessStatus", 0x1AD, SEL),
    usage("AlKeyboardLayout", 0x1AE, SEL),
    usage("AlVirusProtection", 0x1AF, SEL),
    usage("AlEncryption", 0x1B0, SEL),
    usage("AlScreenSaver", 0x1B1, SEL),
    usage("AlAlarms", 0x1B2, SEL),
    usage("AlClock", 0x1B3, SEL),
    usage("AlFileBrowser", 0x1B4, SEL),
    usage("AlPowerStatus", 0x1B5, SEL),
    usage("AlImageBrowser", 0x1B6, SEL),
    usage("AlAudioBrowser", 0x1B7, SEL),
    usage("AlMovieBrowser", 0x1B8, SEL),
    usage("AlDigitalRightsManager", 0x1B9, SEL),
    usage("AlDigitalWallet", 0x1BA, SEL),
    usage("AlInstantMessaging", 0x1BC, SEL),
    usage("AlOemFeatureTipsTutorialBrowser", 0x1BD, SEL),
    usage("AlOemHelp", 0x1BE, SEL),
    usage("AlOnlineCommunity", 0x1BF, SEL),
    usage("AlEntertainmentContentBrowser", 0x1C0, SEL),
    usage("AlOnlineShoppingBrowser", 0x1C1, SEL),
    usage("AlSmartCardInformationHelp", 0x1C2, SEL),
    usage("AlMarketMonitorFinanceBrowser", 0x1C3, SEL),
    usage("AlCustomizedCorporateNewsBrowser", 0x1C4, SEL),
    usage("AlOnlineActivityBrowser", 0x1C5, SEL),
    usage("AlResearchSearchBrowser", 0x1C6, SEL),
    usage("AlAudioPlayer", 0x1C7, SEL),
    usage("AlMessageStatus", 0x1C8, SEL),
    usage("AlContactSync", 0x1C9, SEL),
    usage("AlNavigation", 0x1CA, SEL),
    usage("AlContextAwareDesktopAssistant", 0x1CB, SEL),
    usage("GenericGuiApplicationControls", 0x200, NARY),
    usage("AcNew", 0x201, SEL),
    usage("AcOpen", 0x202, SEL),
    usage("AcClose", 0x203, SEL),
    usage("AcExit", 0x204, SEL),
    usage("AcMaximize", 0x205, SEL),
    usage("AcMinimize", 0x206, SEL),
    usage("AcSave", 0x207, SEL),
    usage("AcPrint", 0x208, SEL),
    usage("AcProperties", 0x209, SEL),
    usage("AcUndo", 0x21A, SEL),
    usage("AcCopy", 0x21B, SEL),
    usage("AcCut", 0x21C, SEL),
    usage("AcPaste", 0x21D, SEL),
    usage("AcSelectAll", 0x21E, SEL),
    usage("AcFind", 0x21F, SEL),
    usage("AcFindAndReplace", 0x220, SEL),
    usage("AcSearch", 0x221, SEL),
    usage("AcGoTo", 0x222, SEL),
    usage("AcHome", 0x223, SEL),
    usage("AcBack", 0x224, SEL),
    usage("AcForward", 0x225, SEL),
    usage("AcStop", 0x226, SEL),
    usage("AcRefresh", 0x227, SEL),
    usage("AcPreviousLink", 0x228, SEL),
    usage("AcNextLink", 0x229, SEL),
    usage("AcBookmarks", 0x22A, SEL),
    usage("AcHistory", 0x22B, SEL),
    usage("AcSubscriptions", 0x22C, SEL),
    usage("AcZoomIn", 0x22D, SEL),
    usage("AcZoomOut", 0x22E, SEL),
    usage("AcZoom", 0x22F, LC),
    usage("AcFullScreenView", 0x230, SEL),
    usage("AcNormalView", 0x231, SEL),
    usage("AcViewToggle", 0x232, SEL),
    usage("AcScrollUp", 0x233, SEL),
    usage("AcScrollDown", 0x234, SEL),
    usage("AcScroll", 0x235, LC),
    usage("AcPanLeft", 0x236, SEL),
    usage("AcPanRight", 0x237, SEL),
    usage("AcPan", 0x238, LC),
    usage("AcNewWindow", 0x239, SEL),
    usage("AcTileHorizontally", 0x23A, SEL),
    usage("AcTileVertically", 0x23B, SEL),
    usage("AcFormat", 0x23C, SEL),
    usage("AcEdit", 0x23D, SEL),
    usage("AcBold", 0x23E, SEL),
    usage("AcItalics", 0x23F, SEL),
    usage("AcUnderline", 0x240, SEL),
    usage("AcStrikethrough", 0x241, SEL),
    usage("AcSubscript", 0x242, SEL),
    usage("AcSuperscript", 0x243, SEL),
    usage("AcAllCaps", 0x244, SEL),
    usage("AcRemote", 0x245, SEL),
    usage("AcResize", 0x246, SEL),
    usage("AcFlipHorizontal", 0x247, SEL),
    usage("AcFlipVertical", 0x248, SEL),
    usage("AcMirrorHorizontal", 0x249, SEL),
    usage("AcMirrorVertical", 0x24A, SEL),
    usage("AcFontSelect", 0x24B, SEL),
    usage("AcFontColor", 0x24C, SEL),
    usage("AcFontSize", 0x24D, SEL),
    usage("AcJustifyLeft", 0x24E, SEL),
    usage("AcJustifyCenterH", 0x24F, SEL),
    usage("AcJustifyRight", 0x250, SEL),
    usage("AcJustifyBlockH", 0x251, SEL),
    usage("AcJustifyTop", 0x252, SEL),
    usage("AcJustifyCenterV", 0x253, SEL),
    usage("AcJustifyBottom", 0x254, SEL),
    usage("AcJustifyBlockV", 0x255, SEL),
    usage("AcIndentDecrease", 0x256, SEL),
    usage("AcIndentIncrease", 0x257, SEL),
    usage("AcNumberedList", 0x258, SEL),
    usage("AcRestartNumbering", 0x259, SEL),
    usage("AcBulletedList", 0x25A, SEL),
    usage("AcPromote", 0x25B, SEL),
    usage("AcDemote", 0x25C, SEL),
    usage("AcYes", 0x25D, SEL),
    usage("AcNo", 0x25E, SEL),
    usage("AcCancel", 0x25F, SEL),
    usage("AcCatalog", 0x260, SEL),
    usage("AcBuyCheckout", 0x261, SEL),
    usage("AcAddToChart", 0x262, SEL),
    usage("AcExpand", 0x263, SEL),
    usage("AcExpandAll", 0x264, SEL),
    usage("AcCollapse", 0x265, SEL),
    usage("AcCollapseAll", 0x266, SEL),
    usage("AcPrintPreview", 0x267, SEL),
    usage("AcPasteSpecial", 0x268, SEL),
    usage("AcInsertMode", 0x269, SEL),
    usage("AcDelete", 0x26A, SEL),
    usage("AcLock", 0x26B, SEL),
    usage("AcUnlock", 0x26C, SEL),
    usage("AcProtect", 0x26D, SEL),
    usage("AcUnprotect", 0x26E, SEL),
    usage("AcAttachComment", 0x26F, SEL),
    usage("AcDeleteComment", 0x270, SEL),
    usage("AcViewComment", 0x271, SEL),
    usage("AcSelectWord", 0x272, SEL),
    usage("AcSelectSentence", 0x273, SEL),
    usage("AcSelectPragraph", 0x274, SEL),
    usage("AcSelectColumn", 0x275, SEL),
    usage("AcSelectRow", 0x276, SEL),
    usage("AcSelectTable", 0x277, SEL),
    usage("AcSelectObject", 0x278, SEL),
    usage("AcRedoRepeat", 0x279, SEL),
    usage("AcSort", 0x27A, SEL),
    usage("AcSortAscending", 0x27B, SEL),
    usage("AcSortDescending", 0x27C, SEL),
    usage("AcFilter", 0x27D, SEL),
    usage("AcSetClock", 0x27E, SEL),
    usage("AcViewClock", 0x27F, SEL),
    usage("AcSelectTimeZone", 0x280, SEL),
    usage("AcEditTimeZones", 0x281, SEL),
    usage("AcSetAlarm", 0x282, SEL),
    usage("AcClearAlarm", 0x283, SEL),
    usage("AcSnoozeAlarm", 0x284, SEL),
    usage("AcResetAlarm", 0x285, SEL),
    usage("AcSynchronize", 0x286, SEL),
    usage("AcSendReceive", 0x287, SEL),
    usage("AcSendTo", 0x288, SEL),
    usage("AcReply", 0x289, SEL),
    usage("AcReplyAll", 0x28A, SEL),
    usage("AcForwardMsg", 0x28B, SEL),
    usage("AcSend", 0x28C, SEL),
    usage("AcAttachFile", 0x28D, SEL),
    usage("AcUpload", 0x28E, SEL),
    usage("AcDownload", 0x28F, SEL),
    usage("AcSetBoarders", 0x290, SEL),
    usage("AcInsertRow", 0x291, SEL),
    usage("AcInsertColumn", 0x292, SEL),
    usage("AcInsertFile", 0x293, SEL),
    usage("AcInsertPicture", 0x294, SEL),
    usage("AcInsertObject", 0x295, SEL),
    usage("AcInsertSymbol", 0x296, SEL),
    usage("AcSaveAndClose", 0x297, SEL),
    usage("AcRename", 0x298, SEL),
    usage("AcMerge", 0x299, SEL),
    usage("AcSplit", 0x29A, SEL),
    usage("AcDistributeHorizontally", 0x29B, SEL),
    usage("AcDistributeVertically", 0x29C, SEL),
    usage("AcNextKeyboardLayoutSelect", 0x29D, SEL),
    usage("AcNavigateGuidance", 0x29E, SEL),
    usage("AcDesktopShowAllWindows", 0x29F, SEL),
    usage("AcSoftKeyLeft", 0x2A0, SEL),
    usage("AcSoftKeyRight", 0x2A1, SEL),
    usage("AcDesktopShowAllApplications", 0x2A2, SEL),
    usage("AcIdleKeepAlive", 0x2B0, SEL),
    usage("ExtendedKeyboardAttributesCollection", 0x2C0, CL),
    usage("KeyboardFormFactor", 0x2C1, SV),
    usage("KeyboardKeyType", 0x2C2, SV),
    usage("KeyboardPhysicalLayout", 0x2C3, SV),
    usage("VendorSpecificKeyboardPhysicalLayout", 0x2C4, SV),
    usage("KeyboardIetfLanguageTagIndex", 0x2C5, SV),
    usage("ImplementedKeyboardInputAssistControls", 0x2C6, SV),
    usage("KeyboardInputAssistPrevious", 0x2C7, SEL),
    usage("KeyboardInputAssistNext", 0x2C8, SEL),
    usage("KeyboardInputAssistPreviousGroup", 0x2C9, SEL),
    usage("KeyboardInputAssistNextGroup", 0x2CA, SEL),
    usage("KeyboardInputAssistAccept", 0x2CB, SEL),
    usage("KeyboardInputAssistCancel", 0x2CC, SEL),
    usage("PrivacyScreenToggle", 0x2D0, OOC),
    usage("PrivacyScreenLevelDecrement", 0x2D1, RTC),
    usage("PrivacyScreenLevelIncrement", 0x2D2, RTC),
    usage("PrivacyScreenLevelMinimum", 0x2D3, OSC),
    usage("PrivacyScreenLevelMaximum", 0x2D4, OSC),
    usage("ContactEdited", 0x500, OOC),
    usage("ContactAdded", 0x501, OOC),
    usage("ContactRecordedActive", 0x502, OOC),
    usage("ContactIndex", 0x503, DV),
    usage("ContactNickname", 0x504, DV),
    usage("ContactFirstName", 0x505, DV),
    usage("ContactLastName", 0x506, DV),
    usage("ContactFullName", 0x507, DV),
    usage("ContactPhoneNumberPersonal", 0x508, DV),
    usage("ContactPhoneNumberBusiness", 0x509, DV),
    usage("ContactPhoneNumberMobile", 0x50A, DV),
    usage("ContactPhoneNumberPager", 0x50B, DV),
    usage("ContactPhoneNumberFax", 0x50C, DV),
    usage("ContactPhoneNumberOther", 0x50D, DV),
    usage("ContactEmailPersonal", 0x50E, DV),
    usage("ContactEmailBusiness", 0x50F, DV),
    usage("ContactEmailOther", 0x510, DV),
    usage("ContactEmailMain", 0x511, DV),
    usage("ContactSpeedDialNumber", 0x512, DV),
    usage("ContactStatusFlag", 0x513, DV),
    usage("ContactMisc", 0x514, DV),
];

/// Digitizers page, HID Usage Tables 1.2 ch. 16.
pub(crate) const DIGITIZERS: &[Entry] = &[
    usage("Digitizer", 0x01, CA),
    usage("Pen", 0x02, CA),
    usage("LightPen", 0x03, CA),
    usage("TouchScreen", 0x04, CA),
    usage("TouchPad", 0x05, CA),
    usage("Whiteboard", 0x06, CA),
    usage("CoordinateMeasuringMachine", 0x07, CA),
    usage("Digitizer3d", 0x08, CA),
    usage("StereoPlotter", 0x09, CA),
    usage("ArticulatedArm", 0x0A, CA),
    usage("Armature", 0x0B, CA),
    usage("MultiplePointDigitizer", 0x0C, CA),
    usage("FreeSpaceWand", 0x0D, CA),
    usage("DeviceConfiguration", 0x0E, CA),
    usage("CapacitiveHeatMapDigitizer", 0x0F, CA),
    usage("Stylus", 0x20, CA | CL),
    usage("Puck", 0x21, CL),
    usage("Finger", 0x22, CL),
    usage("DeviceSettings", 0x23, CL),
    usage("CharacterGesture", 0x24, CL),
    usage("TipPressure", 0x30, DV),
    usage("BarrelPressure", 0x31, DV),
    usage("InRange", 0x32, MC),
    usage("Touch", 0x33, MC),
    usage("Untouch", 0x34, OSC),
    usage("Tap", 0x35, OSC),
    usage("Quality", 0x36, DV),
    usage("DataValid", 0x37, MC),
    usage("TransducerIndex", 0x38, DV),
    usage("TabletFunctionKeys", 0x39, CL),
    usage("ProgramChangeKeys", 0x3A, CL),
    usage("BatteryStrength", 0x3B, DV),
    usage("Invert", 0x3C, MC),
    usage("XTilt", 0x3D, DV),
    usage("YTilt", 0x3E, DV),
    usage("Azimuth", 0x3F, DV),
    usage("Altitude", 0x40, DV),
    usage("Twist", 0x41, DV),
    usage("TipSwitch", 0x42, MC),
    usage("SecondaryTipSwitch", 0x43, MC),
    usage("BarrelSwitch", 0x44, MC),
    usage("Eraser", 0x45, MC),
    usage("TabletPick", 0x46, MC),
    usage("TouchValid", 0x47, MC),
    usage("Width", 0x48, DV),
    usage("Height", 0x49, DV),
    usage("ContactIdentifier", 0x51, DV),
    usage("DeviceMode", 0x52, DV),
    usage("DeviceIdentifier", 0x53, DV | SV),
    usage("ContactCount", 0x54, DV),
    usage("ContactCountMaximum", 0x55, SV),
    usage("ScanTime", 0x56, DV),
    usage("SurfaceSwitch", 0x57, DF),
    usage("ButtonSwitch", 0x58, DF),
    usage("PadType", 0x59, SF),
    usage("SecondaryBarrelSwitch", 0x5A, MC),
    usage("TransducerSerialNumber", 0x5B, SV),
    usage("PreferredColor", 0x5C, DV),
    usage("PreferredColorIsLocked", 0x5D, MC),
    usage("PreferredLineWidth", 0x5E, DV),
    usage("PreferredLineWidthIsLocked", 0x5F, MC),
    usage("LatencyMode", 0x60, DF),
    usage("GestureCharacterQuality", 0x61, DV),
    usage("CharacterGestureDataLength", 0x62, DV),
    usage("CharacterGestureData", 0x63, DV),
    usage("GestureCharacterEncoding", 0x64, NARY),
    usage("Utf8CharacterGestureEncoding", 0x65, SEL),
    usage("Utf16LittleEndianCharacterGestureEncoding", 0x66, SEL),
    usage("Utf16BigEndianCharacterGestureEncoding", 0x67, SEL),
    usage("Utf32LittleEndianCharacterGestureEncoding", 0x68, SEL),
    usage("Utf32BigEndianCharacterGestureEncoding", 0x69, SEL),
    usage("CapacitiveHeatMapProtocolVendorId", 0x6A, SV),
    usage("CapacitiveHeatMapProtocolVersion", 0x6B, SV),
    usage("CapacitiveHeatMapFrameData", 0x6C, DV),
    usage("GestureCharacterEnable", 0x6D, DF),
    usage("PreferredLineStyle", 0x70, NARY),
    usage("PreferredLineStyleIsLocked", 0x71, MC),
    usage("Ink", 0x72, SEL),
    usage("Pencil", 0x73, SEL),
    usage("Highlighter", 0x74, SEL),
    usage("ChiselMarker", 0x75, SEL),
    usage("Brush", 0x76, SEL),
    usage("NoPreference", 0x77, SEL),
    usage("DigitizerDiagnostic", 0x80, CL),
    usage("DigitizerError", 0x81, NARY),
    usage("ErrNormalStatus", 0x82, SEL),
    usage("ErrTransducersExceeded", 0x83, SEL),
    usage("ErrFullTransFeaturesUnavailable", 0x84, SEL),
    usage("ErrChargeLow", 0x85, SEL),
    usage("TransducerSoftwareInfo", 0x90, CL),
    usage("TransducerVendorId", 0x91, SV),
    usage("TransducerProductId", 0x92, SV),
    usage("DeviceSupportedProtocols", 0x93, NARY | CL),
    usage("TransducerSupportedProtocols", 0x94, NARY | CL),
    usage("NoProtocol", 0x95, SEL),
    usage("WacomAesProtocol", 0x96, SEL),
    usage("UsiProtocol", 0x97, SEL),
    usage("MicrosoftPenProtocol", 0x98, SEL),
    usage("SupportedReportRates", 0xA0, SV | CL),
    usage("ReportRate", 0xA1, DV),
    usage("TransducerConnected", 0xA2, SF),
    usage("SwitchDisabled", 0xA3, SEL),
    usage("SwitchUnimplemented", 0xA4, SEL),
    usage("TransducerSwitches", 0xA5, SEL),
];

/// Haptics page, HID Usage Tables 1.2 ch. 17.
pub(crate) const HAPTICS: &[Entry] = &[
    usage("SimpleHapticController", 0x01, CA | CL),
    usage("WaveformList", 0x10, NARY),
    usage("DurationList", 0x11, NARY),
    usage("AutoTrigger", 0x20, DV),
    usage("ManualTrigger", 0x21, DV),
    usage("AutoTriggerAssociatedControl", 0x22, SV),
    usage("Intensity", 0x23, DV),
    usage("RepeatCount", 0x24, DV),
    usage("RetriggerPeriod", 0x25, DV),
    usage("WaveformVendorPage", 0x26, SV),
    usage("WaveformVendorId", 0x27, SV),
    usage("WaveformCutoffTime", 0x28, SV),
    usage("WaveformNone", 0x1001, SV),
    usage("WaveformStop", 0x1002, SV),
    usage("WaveformClick", 0x1003, SV),
    usage("WaveformBuzzContinuous", 0x1004, SV),
    usage("WaveformRumbleContinuous", 0x1005, SV),
    usage("WaveformPress", 0x1006, SV),
    usage("WaveformRelease", 0x1007, SV),
];

/// Physical Interface Device page, HID PID 1.0 ch. 5.
pub(crate) const PID: &[Entry] = &[
    usage("PhysicalInterfaceDevice", 0x01, CA),
    usage("Normal", 0x20, DV),
    usage("SetEffectReport", 0x21, CL | LC | SV),
    usage("EffectBlockIndex", 0x22, DV),
    usage("ParameterBlockOffset", 0x23, DV),
    usage("RomFlag", 0x24, DV),
    usage("EffectType", 0x25, NARY),
    usage("EtConstantForce", 0x26, SEL),
    usage("EtRamp", 0x27, SEL),
    usage("EtCustomForceData", 0x28, SEL),
    usage("EtSquare", 0x30, SEL),
    usage("EtSine", 0x31, SEL),
    usage("EtTriangle", 0x32, SEL),
    usage("EtSawtoothUp", 0x33, SEL),
    usage("EtSawtoothDown", 0x34, SEL),
    usage("EtSpring", 0x40, SEL),
    usage("EtDamper", 0x41, SEL),
    usage("EtInertia", 0x42, SEL),
    usage("EtFriction", 0x43, SEL),
    usage("Duration", 0x50, DV),
    usage("SamplePeriod", 0x51, DV),
    usage("Gain", 0x52, DV),
    usage("TriggerButton", 0x53, DV),
    usage("TriggerRepeatInterval", 0x54, DV),
    usage("AxesEnable", 0x55, US),
    usage("DirectionEnable", 0x56, DF),
    usage("Direction", 0x57, CL | DV),
    usage("TypeSpecificBlockOffset", 0x58, CL),
    usage("BlockType", 0x59, NARY),
    usage("SetEnvelopeReport", 0x5A, CL | LC | SV),
    usage("AttackLevel", 0x5B, DV),
    usage("AttackTime", 0x5C, DV),
    usage("FadeLevel", 0x5D, DV),
    usage("FadeTime", 0x5E, DV),
    usage("SetConditionReport", 0x5F, CL | LC | SV),
    usage("CpOffset", 0x60, DV),
    usage("PositiveCoefficient", 0x61, DV),
    usage("NegativeCoefficient", 0x62, DV),
    usage("PositiveSaturation", 0x63, DV),
    usage("NegativeSaturation", 0x64, DV),
    usage("DeadBand", 0x65, DV),
    usage("DownloadForceSample", 0x66, CL),
    usage("IsochCustomForceEnable", 0x67, DF),
    usage("CustomForceDataReport", 0x68, CL),
    usage("CustomForceData", 0x69, DV),
    usage("CustomForceVendorDefinedData", 0x6A, DV),
    usage("SetCustomForceReport", 0x6B, CL | LC | SV),
    usage("CustomForceDataOffset", 0x6C, DV),
    usage("SampleCount", 0x6D, DV),
    usage("SetPeriodicReport", 0x6E, CL | LC | SV),
    usage("Offset", 0x6F, DV),
    usage("Magnitude", 0x70, DV),
    usage("Phase", 0x71, DV),
    usage("Period", 0x72, DV),
    usage("SetConstantForceReport", 0x73, CL | LC | SV),
    usage("SetRampForceReport", 0x74, CL | LC | SV),
    usage("RampStart", 0x75, DV),
    usage("RampEnd", 0x76, DV),
    usage("EffectOperationReport", 0x77, CL),
    usage("EffectOperation", 0x78, NARY),
    usage("OpEffectStart", 0x79, SEL),
    usage("OpEffectStartSolo", 0x7A, SEL),
    usage("OpEffectStop", 0x7B, SEL),
    usage("LoopCount", 0x7C, DV),
    usage("DeviceGainReport", 0x7D, CL),
    usage("DeviceGain", 0x7E, DV),
    usage("PidPoolReport", 0x7F, CL),
    usage("RamPoolSize", 0x80, DV),
    usage("RomPoolSize", 0x81, SV),
    usage("RomEffectBlockCount", 0x82, SV),
    usage("SimultaneousEffectsMax", 0x83, SV),
    usage("PoolAlignment", 0x84, SV),
    usage("PidPoolMoveReport", 0x85, CL),
    usage("MoveSource", 0x86, DV),
    usage("MoveDestination", 0x87, DV),
    usage("MoveLength", 0x88, DV),
    usage("PidBlockLoadReport", 0x89, CL),
    usage("BlockLoadStatus", 0x8B, NARY),
    usage("BlockLoadSuccess", 0x8C, SEL),
    usage("BlockLoadFull", 0x8D, SEL),
    usage("BlockLoadError", 0x8E, SEL),
    usage("BlockHandle", 0x8F, DV),
    usage("PidBlockFreeReport", 0x90, CL),
    usage("TypeSpecificBlockHandle", 0x91, CL),
    usage("PidStateReport", 0x92, CL),
    usage("EffectPlaying", 0x94, DF),
    usage("PidDeviceControlReport", 0x95, CL),
    usage("PidDeviceControl", 0x96, NARY),
    usage("DcEnableActuators", 0x97, SEL),
    usage("DcDisableActuators", 0x98, SEL),
    usage("DcStopAllEffects", 0x99, SEL),
    usage("DcDeviceReset", 0x9A, SEL),
    usage("DcDevicePause", 0x9B, SEL),
    usage("DcDeviceContinue", 0x9C, SEL),
    usage("DevicePaused", 0x9F, DF),
    usage("ActuatorsEnabled", 0xA0, DF),
    usage("SafetySwitch", 0xA4, DF),
    usage("ActuatorOverrideSwitch", 0xA5, DF),
    usage("ActuatorPower", 0xA6, OOC),
    usage("StartDelay", 0xA7, DV),
    usage("ParameterBlockSize", 0xA8, CL),
    usage("DeviceManagedPool", 0xA9, SF),
    usage("SharedParameterBlocks", 0xAA, SF),
    usage("CreateNewEffectReport", 0xAB, CL),
    usage("RamPoolAvailable", 0xAC, DV),
];

/// Unicode page, HID Usage Tables 1.2 ch. 18.
pub(crate) const UNICODE: &[Entry] = &[
    // Ucs0 through Ucs65535
    usage("Ucs#", 0x0000, NONE),
    usage("Ucs#", 0xFFFF, NONE),
];

/// Eye and Head Trackers page, HID Usage Tables 1.2 ch. 19.
pub(crate) const EYE_AND_HEAD_TRACKERS: &[Entry] = &[
    usage("EyeTracker", 0x01, CA),
    usage("HeadTracker", 0x02, CA),
    usage("TrackingData", 0x10, CP),
    usage("Capabilities", 0x11, CL),
    usage("Configuration", 0x12, CL),
    usage("Status", 0x13, CL),
    usage("Control", 0x14, CL),
    usage("SensorTimestamp", 0x20, DV),
    usage("PositionX", 0x21, DV),
    usage("PositionY", 0x22, DV),
    usage("PositionZ", 0x23, DV),
    usage("GazePoint", 0x24, CP),
    usage("LeftEyePosition", 0x25, CP),
    usage("RightEyePosition", 0x26, CP),
    usage("HeadPosition", 0x27, CP),
    usage("HeadDirectionPoint", 0x28, CP),
    usage("RotationAboutXAxis", 0x29, DV),
    usage("RotationAboutYAxis", 0x2A, DV),
    usage("RotationAboutZAxis", 0x2B, DV),
    usage("TrackerQuality", 0x100, SV),
    usage("MinimumTrackingDistance", 0x101, SV),
    usage("OptimumTrackingDistance", 0x102, SV),
    usage("MaximumTrackingDistance", 0x103, SV),
    usage("MaximumScreenPlaneWidth", 0x104, SV),
    usage("MaximumScreenPlaneHeight", 0x105, SV),
    usage("DisplayManufacturerId", 0x200, SV),
    usage("DisplayProductId", 0x201, SV),
    usage("DisplaySerialNumber", 0x202, SV),
    usage("DisplayManufacturerDate", 0x203, SV),
    usage("CalibratedScreenWidth", 0x204, SV),
    usage("CalibratedScreenHeight", 0x205, SV),
    usage("SamplingFrequency", 0x300, DV),
    usage("ConfigurationStatus", 0x301, DV),
    usage("DeviceModeRequest", 0x400, DV),
];

/// Auxiliary Display page, HID Usage Tables 1.2 ch. 20.
pub(crate) const AUXILIARY_DISPLAY: &[Entry] = &[
    usage("AlphanumericDisplay", 0x01, CA),
    usage("AuxiliaryDisplay", 0x02, CA),
    usage("DisplayAttributesReport", 0x20, CL),
    usage("AsciiCharacterSet", 0x21, SF),
    usage("DataReadBack", 0x22, SF),
    usage("FontReadBack", 0x23, SF),
    usage("DisplayControlReport", 0x24, CL),
    usage("ClearDisplay", 0x25, DF),
    usage("DisplayEnable", 0x26, DF),
    usage("ScreenSaverDelay", 0x27, SV | DV),
    usage("ScreenSaverEnable", 0x28, DF),
    usage("VerticalScroll", 0x29, SF | DF),
    usage("HorizontalScroll", 0x2A, SF | DF),
    usage("CharacterReport", 0x2B, CL),
    usage("DisplayData", 0x2C, DV),
    usage("DisplayStatus", 0x2D, CL),
    usage("StatNotReady", 0x2E, SEL),
    usage("StatReady", 0x2F, SEL),
    usage("ErrNotALoadableCharacter", 0x30, SEL),
    usage("ErrFontDataCannotBeRead", 0x31, SEL),
    usage("CursorPositionReport", 0x32, SEL),
    usage("Row", 0x33, DV),
    usage("Column", 0x34, DV),
    usage("Rows", 0x35, SV),
    usage("Columns", 0x36, SV),
    usage("CursorPixelPosition", 0x37, SF),
    usage("CursorMode", 0x38, DF),
    usage("CursorEnable", 0x39, DF),
    usage("CursorBlink", 0x3A, DF),
    usage("FontReport", 0x3B, CL),
    usage("FontData", 0x3C, BB),
    usage("CharacterWidth", 0x3D, SV),
    usage("CharacterHeight", 0x3E, SV),
    usage("CharacterSpacingHorizontal", 0x3F, SV),
    usage("CharacterSpacingVertical", 0x40, SV),
    usage("UnicodeCharacterSet", 0x41, SF),
    usage("Font7Segment", 0x42, SF),
    usage("DirectMap7Segment", 0x43, SF),
    usage("Font14Segment", 0x44, SF),
    usage("DirectMap14Segment", 0x45, SF),
    usage("DisplayBrightness", 0x46, DV),
    usage("DisplayContrast", 0x47, DV),
    usage("CharacterAttribute", 0x48, CL),
    usage("AtributeReadback", 0x49, SF),
    usage("AttributeData", 0x4A, DV),
    usage("CharAttrEnhance", 0x4B, OOC),
    usage("CharAttrUnderline", 0x4C, OOC),
    usage("CharAttrBlink", 0x4D, OOC),
    usage("BitmapSizeX", 0x80, SV),
    usage("BitmapSizeY", 0x81, SV),
    usage("MaxBlitSize", 0x82, SV),
    usage("BitDepthFormat", 0x83, SV),
    usage("DisplayOrientation", 0x84, DV),
    usage("PaletteReport", 0x85, CL),
    usage("PaletteDataSize", 0x86, SV),
    usage("PaletteDataOffset", 0x87, SV),
    usage("PaletteData", 0x88, BB),
    usage("BlitReport", 0x8A, CL),
    usage("BlitRectangleX1", 0x8B, SV),
    usage("BlitRectangleY1", 0x8C, SV),
    usage("BlitRectangleX2", 0x8D, SV),
    usage("BlitRectangleY2", 0x8E, SV),
    usage("BlitData", 0x8F, BB),
    usage("SoftButton", 0x90, CL),
    usage("SoftButtonId", 0x91, SV),
    usage("SoftButtonSide", 0x92, SV),
    usage("SoftButtonOffset1", 0x93, SV),
    usage("SoftButtonOffset2", 0x94, SV),
    usage("SoftButtonReport", 0x95, SV),
    usage("SoftKeys", 0xC2, SV),
    usage("DisplayDataExtensions", 0xCC, SF),
    usage("CharacterMapping", 0xCF, SV),
    usage("UnicodeEquivalent", 0xDD, SV),
    usage("CharacterPageMapping", 0xDF, SV),
    usage("RequestReport", 0xFF, DV),
];

/// Sensors page, HID Usage Tables 1.2 ch. 21.
pub(crate) const SENSORS: &[Entry] = &[
    usage("Sensor", 0x01, CA | CP),
    usage("Biometric", 0x10, CA | CP),
    usage("BiometricHumanPresence", 0x11, CA | CP),
    usage("BiometricHumanProximity", 0x12, CA | CP),
    usage("BiometricHumanTouch", 0x13, CA | CP),
    usage("BiometricBloodPressure", 0x14, CA | CP),
    usage("BiometricBodyTemperature", 0x15, CA | CP),
    usage("BiometricHeartRate", 0x16, CA | CP),
    usage("BiometricHeartRateVariability", 0x17, CA | CP),
    usage("BiometricPeripheralOxygenSaturation", 0x18, CA | CP),
    usage("BiometricRespiratoryRate", 0x19, CA | CP),
    usage("Electrical", 0x20, CA | CP),
    usage("ElectricalCapacitance", 0x21, CA | CP),
    usage("ElectricalCurrent", 0x22, CA | CP),
    usage("ElectricalPower", 0x23, CA | CP),
    usage("ElectricalInductance", 0x24, CA | CP),
    usage("ElectricalResistance", 0x25, CA | CP),
    usage("ElectricalVoltage", 0x26, CA | CP),
    usage("ElectricalPotentiometer", 0x27, CA | CP),
    usage("ElectricalFrequency", 0x28, CA | CP),
    usage("ElectricalPeriod", 0x29, CA | CP),
    usage("Environmental", 0x30, CA | CP),
    usage("EnvironmentalAtmosphericPressure", 0x31, CA | CP),
    usage("EnvironmentalHumidity", 0x32, CA | CP),
    usage("EnvironmentalTemperature", 0x33, CA | CP),
    usage("EnvironmentalWindDirection", 0x34, CA | CP),
    usage("EnvironmentalWindSpeed", 0x35, CA | CP),
    usage("EnvironmentalAirQuality", 0x36, CA | CP),
    usage("EnvironmentalHeatIndex", 0x37, CA | CP),
    usage("EnvironmentalSurfaceTemperature", 0x38, CA | CP),
    usage("EnvironmentalVolatileOrganicCompounds", 0x39, CA | CP),
    usage("EnvironmentalObjectPresence", 0x3A, CA | CP),
    usage("EnvironmentalObjectProximity", 0x3B, CA | CP),
    usage("Light", 0x40, CA | CP),
    usage("LightAmbientLight", 0x41, CA | CP),
    usage("LightConsumerInfrared", 0x42, CA | CP),
    usage("LightInfraredLight", 0x43, CA | CP),
    usage("LightVisibleLight", 0x44, CA | CP),
    usage("LightUltravioletLight", 0x45, CA | CP),
    usage("Location", 0x50, CA | CP),
    usage("LocationBroadcast", 0x51, CA | CP),
    usage("LocationDeadReckoning", 0x52, CA | CP),
    usage("LocationGps", 0x53, CA | CP),
    usage("LocationLookup", 0x54, CA | CP),
    usage("LocationOther", 0x55, CA | CP),
    usage("LocationStatic", 0x56, CA | CP),
    usage("LocationTriangulation", 0x57, CA | CP),
    usage("Mechanical", 0x60, CA | CP),
    usage("MechanicalBooleanSwitch", 0x61, CA | CP),
    usage("MechanicalBooleanSwitchArray", 0x62, CA | CP),
    usage("MechanicalMultivalueSwitch", 0x63, CA | CP),
    usage("MechanicalForce", 0x64, CA | CP),
    usage("MechanicalPressure", 0x65, CA | CP),
    usage("MechanicalStrain", 0x66, CA | CP),
    usage("MechanicalWeight", 0x67, CA | CP),
    usage("MechanicalHapticVibrator", 0x68, CA | CP),
    usage("MechanicalHallEffectSwitch", 0x69, CA | CP),
    usage("Motion", 0x70, CA | CP),
    usage("MotionAccelerometer1d", 0x71, CA | CP),
    usage("MotionAccelerometer2d", 0x72, CA | CP),
    usage("MotionAccelerometer3d", 0x73, CA | CP),
    usage("MotionGyrometer1d", 0x74, CA | CP),
    usage("MotionGyrometer2d", 0x75, CA | CP),
    usage("MotionGyrometer3d", 0x76, CA | CP),
    usage("MotionMotionDetector", 0x77, CA | CP),
    usage("MotionSpeedometer", 0x78, CA | CP),
    usage("MotionAccelerometer", 0x79, CA | CP),
    usage("MotionGyrometer", 0x7A, CA | CP),
    usage("MotionGraviyVector", 0x7B, CA | CP),
    usage("MotionLinearAccelerometer", 0x7C, CA | CP),
    usage("Orientation", 0x80, CA | CP),
    usage("OrientationCompass1d", 0x81, CA | CP),
    usage("OrientationCompass2d", 0x82, CA | CP),
    usage("OrientationCompass3d", 0x83, CA | CP),
    usage("OrientationInclinometer1d", 0x84, CA | CP),
    usage("OrientationInclinometer2d", 0x85, CA | CP),
    usage("OrientationInclinometer3d", 0x86, CA | CP),
    usage("OrientationDistance1d", 0x87, CA | CP),
    usage("OrientationDistance2d", 0x88, CA | CP),
    usage("OrientationDistance3d", 0x89, CA | CP),
    usage("OrientationDeviceOrientation", 0x8A, CA | CP),
    usage("OrientationCompass", 0x8B, CA | CP),
    usage("OrientationInclinometer", 0x8C, CA | CP),
    usage("OrientationDistance", 0x8D, CA | CP),
    usage("OrientationRelativeOrientation", 0x8E, CA | CP),
    usage("OrientationSimpleOrientation", 0x8F, CA | CP),
    usage("Scanner", 0x90, CA | CP),
    usage("ScannerBarcode", 0x91, CA | CP),
    usage("ScannerRfid", 0x92, CA | CP),
    usage("ScannerNfc", 0x93, CA | CP),
    usage("Time", 0xA0, CA | CP),
    usage("TimeAlarmTimer", 0xA1, CA | CP),
    usage("TimeRealTimeClock", 0xA2, CA | CP),
    usage("PersonalActivity", 0xB0, CA | CP),
    usage("PersonalActivityActivityDetection", 0xB1, CA | CP),
    usage("PersonalActivityDevicePosition", 0xB2, CA | CP),
    usage("PersonalActivityPedometer", 0xB3, CA | CP),
    usage("PersonalActivityStepDetection", 0xB4, CA | CP),
    usage("OrientationExtended", 0xC0, CA | CP),
    usage("OrientationExtendedGeomagneticOrientation", 0xC1, CA | CP),
    usage("OrientationExtendedMagnetometer", 0xC2, CA | CP),
    usage("Gesture", 0xD0, CA | CP),
    usage("GestureChassisFlipGesture", 0xD1, CA | CP),
    usage("GestureHingeFoldGesture", 0xD2, CA | CP),
    usage("Other", 0xE0, CA | CP),
    usage("OtherCustom", 0xE1, CA | CP),
    usage("OtherGeneric", 0xE2, CA | CP),
    usage("OtherGenericEnumerator", 0xE3, CA | CP),
    usage("OtherHingeAngle", 0xE4, CA | CP),
    usage("VendorReserved1", 0xF0, CA | CP),
    usage("VendorReserved2", 0xF1, CA | CP),
    usage("VendorReserved3", 0xF2, CA | CP),
    usage("VendorReserved4", 0xF3, CA | CP),
    usage("VendorReserved5", 0xF4, CA | CP),
    usage("VendorReserved6", 0xF5, CA | CP),
    usage("VendorReserved7", 0xF6, CA | CP),
    usage("VendorReserved8", 0xF7, CA | CP),
    usage("VendorReserved9", 0xF8, CA | CP),
    usage("VendorReserved10", 0xF9, CA | CP),
    usage("VendorReserved11", 0xFA, CA | CP),
    usage("VendorReserved12", 0xFB, CA | CP),
    usage("VendorReserved13", 0xFC, CA | CP),
    usage("VendorReserved14", 0xFD, CA | CP),
    usage("VendorReserved15", 0xFE, CA | CP),
    usage("VendorReserved16", 0xFF, CA | CP),
    usage("Event", 0x200, DV),
    usage("EventSensorState", 0x201, NARY),
    usage("EventSensorEvent", 0x202, NARY),
    usage("Property", 0x300, DV),
    usage("PropertyFriendlyName", 0x301, SV),
    usage("PropertyPersistentUniqueId", 0x302, DV),
    usage("PropertySensorStatus", 0x303, DV),
    usage("PropertyMinimumReportInterval", 0x304, SV),
    usage("PropertySensorManufacturer", 0x305, SV),
    usage("PropertySensorModel", 0x306, SV),
    usage("PropertySensorSerialNumber", 0x307, SV),
    usage("PropertySensorDescription", 0x308, SV),
    usage("PropertySensorConnectionType", 0x309, NARY),
    usage("PropertySensorDevicePath", 0x30A, DV),
    usage("PropertyHardwareRevision", 0x30B, SV),
    usage("PropertyFirmwareVersion", 0x30C, SV),
    usage("PropertyReleaseDate", 0x30D, SV),
    usage("PropertyReportInterval", 0x30E, DV),
    usage("PropertyChangeSensitivityAbsolute", 0x30F, DV),
    usage("PropertyChangeSensitivityPercentOfRange", 0x310, DV),
    usage("PropertyChangeSensitivityPercentRelative", 0x311, DV),
    usage("PropertyAccuracy", 0x312, DV),
    usage("PropertyResolution", 0x313, DV),
    usage("PropertyMaximum", 0x314, DV),
    usage("PropertyMinimum", 0x315, DV),
    usage("PropertyReportingState", 0x316, NARY),
    usage("PropertySamplingRate", 0x317, DV),
    usage("PropertyResponseCurve", 0x318, DV),
    usage("PropertyPowerState", 0x319, NARY),
    usage("PropertyMaximumFifoEvents", 0x31A, SV),
    usage("PropertyReportLatency", 0x31B, DV),
    usage("PropertyFlushFifoEvents", 0x31C, DF),
    usage("PropertyMaximumPowerConsumption", 0x31D, DV),
    usage("PropertyIsPrimary", 0x31E, DF),
    usage("DataFieldLocation", 0x400, DV),
    usage("DataFieldAltitudeAntennaSeaLevel", 0x402, SV),
    usage("DataFieldDifferentialReferenceStationId", 0x403, SV),
    usage("DataFieldAltitudeEllipsoidError", 0x404, SV),
    usage("DataFieldAltitudeEllipsoid", 0x405, SV),
    usage("DataFieldAltitudeSeaLevelError", 0x406, SV),
    usage("DataFieldAltitudeSeaLevel", 0x407, SV),
    usage("DataFieldDifferentialGpsDataAge", 0x408, SV),
    usage("DataFieldErrorRadius", 0x409, SV),
    usage("DataFieldFixQuality", 0x40A, NARY),
    usage("DataFieldFixType", 0x40B, NARY),
    usage("DataFieldGeoidalSeparation", 0x40C, SV),
    usage("DataFieldGpsOperationMode", 0x40D, NARY),
    usage("DataFieldGpsSelectionMode", 0x40E, NARY),
    usage("DataFieldGpsStatus", 0x40F, NARY),
    usage("DataFieldPositionDilutionOfPrecision", 0x410, SV),
    usage("DataFieldHorizontalDilutionOfPrecision", 0x411, SV),
    usage("DataFieldVerticalDilutionOfPrecision", 0x412, SV),
    usage("DataFieldLatitude", 0x413, SV),
    usage("DataFieldLongitude", 0x414, SV),
    usage("DataFieldTrueHeading", 0x415, SV),
    usage("DataFieldMagneticHeading", 0x416, SV),
    usage("DataFieldMagneticVariation", 0x417, SV),
    usage("DataFieldSpeed", 0x418, SV),
    usage("DataFieldSatellitesInView", 0x419, SV),
    usage("DataFieldSatellitesInViewAzimuth", 0x41A, SV),
    usage("DataFieldSatellitesInViewElevation", 0x41B, SV),
    usage("DataFieldSatellitesInViewIds", 0x41C, SV),
    usage("DataFieldSatellitesInViewPrns", 0x41D, SV),
    usage("DataFieldSatellitesInViewSnRatio", 0x41E, SV),
    usage("DataFieldSatellitesUsedCount", 0x41F, SV),
    usage("DataFieldSatellitesUsedPrns", 0x420, SV),
    usage("DataFieldNmeaSentence", 0x421, SV),
    usage("DataFieldAddressLine1", 0x422, SV),
    usage("DataFieldAddressLine2", 0x423, SV),
    usage("DataFieldCity", 0x424, SV),
    usage("DataFieldStateOrProvince", 0x425, SV),
    usage("DataFieldCountryOrRegion", 0x426, SV),
    usage("DataFieldPostalCode", 0x427, SV),
    usage("PropertyLocation", 0x42A, DV),
    usage("PropertyLocationDesiredAccuracy", 0x42B, NARY),
    usage("DataFieldEnvironmental", 0x430, SV),
    usage("DataFieldAtmosphericPressure", 0x431, SV),
    usage("DataFieldRelativeHumidity", 0x433, SV),
    usage("DataFieldTemperature", 0x434, SV),
    usage("DataFieldWindDirection", 0x435, SV),
    usage("DataFieldWindSpeed", 0x436, SV),
    usage("DataFieldAirQualityIndex", 0x437, SV),
    usage("DataFieldEquivalentCo2", 0x438, SV),
    usage("DataFieldVolatileOrganicCompoundConcentration", 0x439, SV),
    usage("DataFieldObjectPresence", 0x43A, SF),
    usage("DataFieldObjectProximityRange", 0x43B, SV),
    usage("DataFieldObjectProximityOutOfRange", 0x43C, SF),
    usage("PropertyEnvironmental", 0x440, SV),
    usage("PropertyReferencePressure", 0x441, SV),
    usage("DataFieldMotion", 0x450, DV),
    usage("DataFieldMotionState", 0x451, SF),
    usage("DataFieldAcceleration", 0x452, SV),
    usage("DataFieldAccelerationAxisX", 0x453, SV),
    usage("DataFieldAccelerationAxisY", 0x454, SV),
    usage("DataFieldAccelerationAxisZ", 0x455, SV),
    usage("DataFieldAngularVelocity", 0x456, SV),
    usage("DataFieldAngularVelocityAboutXAxis", 0x457, SV),
    usage("DataFieldAngularVelocityAboutYAxis", 0x458, SV),
    usage("DataFieldAngularVelocityAboutZAxis", 0x459, SV),
    usage("DataFieldAngularPosition", 0x45A, SV),
    usage("DataFieldAngularPositionAboutXAxis", 0x45B, SV),
    usage("DataFieldAngularPositionAboutYAxis", 0x45C, SV),
    usage("DataFieldAngularPositionAboutZAxis", 0x45D, SV),
    usage("DataFieldMotionSpeed", 0x45E, SV),
    usage("DataFieldMotionIntensity", 0x45F, SV),
    usage("DataFieldOrientation", 0x470, DV),
    usage("DataFieldHeading", 0x471, SV),
    usage("DataFieldHeadingXAxis", 0x472, SV),
    usage("DataFieldHeadingYAxis", 0x473, SV),
    usage("DataFieldHeadingZAxis", 0x474, SV),
    usage("DataFieldHeadingCompensatedMagneticNorth", 0x475, SV),
    usage("DataFieldHeadingCompensatedTrueNorth", 0x476, SV),
    usage("DataFieldHeadingMagneticNorth", 0x477, SV),
    usage("DataFieldHeadingTrueNorth", 0x478, SV),
    usage("DataFieldDistance", 0x479, SV),
    usage("DataFieldDistanceXAxis", 0x47A, SV),
    usage("DataFieldDistanceYAxis", 0x47B, SV),
    usage("DataFieldDistanceZAxis", 0x47C, SV),
    usage("DataFieldDistanceOutOfRange", 0x47D, SF),
    usage("DataFieldTilt", 0x47E, SV),
    usage("DataFieldTiltXAxis", 0x47F, SV),
    usage("DataFieldTiltYAxis", 0x480, SV),
    usage("DataFieldTiltZAxis", 0x481, SV),
    usage("DataFieldRotationMatrix", 0x482, SV),
    usage("DataFieldQuaternion", 0x483, SV),
    usage("DataFieldMagneticFlux", 0x484, SV),
    usage("DataFieldMagneticFluxXAxis", 0x485, SV),
    usage("DataFieldMagneticFluxYAxis", 0x486, SV),
    usage("DataFieldMagneticFluxZAxis", 0x487, SV),
    usage("DataFieldMagnetometerAccuracy", 0x488, NARY),
    usage("DataFieldSimpleOrientationDirection", 0x489, NARY),
    usage("DataFieldMechanical", 0x490, DV),
    usage("DataFieldBooleanSwitchState", 0x491, SF),
    usage("DataFieldBooleanSwitchArrayStates", 0x492, SV),
    usage("DataFieldMultivalueSwitchValue", 0x493, SV),
    usage("DataFieldField", 0x494, SV),
    usage("DataFieldAbsolutePressure", 0x495, SV),
    usage("DataFieldGaugePressure", 0x496, SV),
    usage("DataFieldStrain", 0x497, SV),
    usage("DataFieldWeight", 0x498, SV),
    usage("PropertyMechanical", 0x4A0, DV),
    usage("PropertyVibrationState", 0x4A1, DF),
    usage("PropertyForwardVibrationSpeed", 0x4A2, DV),
    usage("PropertyBackwardVibrationSpeed", 0x4A3, DV),
    usage("DataFieldBiometric", 0x4B0, DV),
    usage("DataFieldHumanPresence", 0x4B1, SF),
    usage("DataFieldHumanProximityRange", 0x4B2, SV),
    usage("DataFieldHumanProximityOutOfRange", 0x4B3, SF),
    usage("DataFieldHumanTouchState", 0x4B4, SF),
    usage("DataFieldBloodPressure", 0x4B5, SV),
    usage("DataFieldBloodPressureDiastolic", 0x4B6, SV),
    usage("DataFieldBloodPressureSystolic", 0x4B7, SV),
    usage("DataFieldHeartRate", 0x4B8, SV),
    usage("DataFieldRestingHeartRate", 0x4B9, SV),
    usage("DataFieldHeartbeatInterval", 0x4BA, SV),
    usage("DataFieldRespiratoryRate", 0x4BB, SV),
    usage("DataFieldSpo2", 0x4BC, SV),
    usage("DataFieldLight", 0x4D0, DV),
    usage("DataFieldIlluminance", 0x4D1, SV),
    usage("DataFieldColorTemperature", 0x4D2, SV),
    usage("DataFieldChromaticity", 0x4D3, SV),
    usage("DataFieldChromaticityX", 0x4D4, SV),
    usage("DataFieldChromaticityY", 0x4D5, SV),
    usage("DataFieldConsumerIrSentenceReceive", 0x4D6, SV),
    usage("DataFieldInfraredLight", 0x4D7, SV),
    usage("DataFieldRedLight", 0x4D8, SV),
    usage("DataFieldGreenLight", 0x4D9, SV),
    usage("DataFieldBlueLight", 0x4DA, SV),
    usage("DataFieldUltravioletALight", 0x4DB, SV),
    usage("DataFieldUltravioletBLight", 0x4DC, SV),
    usage("DataFieldUltravioletIndex", 0x4DD, SV),
    usage("DataFieldNearInfraredLight", 0x4DE, SV),
    usage("PropertyLight", 0x4DF, DV),
    usage("PropertyConsumerIrSentenceSend", 0x4E0, DV),
    usage("PropertyAutoBrightnessPreferred", 0x4E2, DF),
    usage("PropertyAutoColorPreferred", 0x4E3, DF),
    usage("DataFieldScanner", 0x4F0, DV),
    usage("DataFieldRfidTag40Bit", 0x4F1, SV),
    usage("DataFieldNfcSentenceReceive", 0x4F2, SV),
    usage("PropertyScanner", 0x4F8, DV),
    usage("PropertyNfcSentenceSend", 0x4F9, SV),
    usage("DataFieldElectrical", 0x500, SV),
    usage("DataFieldCapacitance", 0x501, SV),
    usage("DataFieldCurrent", 0x502, SV),
    usage("DataFieldElectricalPower", 0x503, SV),
    usage("DataFieldInductance", 0x504, SV),
    usage("DataFieldResistance", 0x505, SV),
    usage("DataFieldVoltage", 0x506, SV),
    usage("DataFieldFrequency", 0x507, SV),
    usage("DataFieldPeriod", 0x508, SV),
    usage("DataFieldPercentOfRange", 0x509, SV),
    usage("DataFieldTime", 0x520, DV),
    usage("DataFieldYear", 0x521, SV),
    usage("DataFieldMonth", 0x522, SV),
    usage("DataFieldDay", 0x523, SV),
    usage("DataFieldDayOfWeek", 0x524, NARY),
    usage("DataFieldHour", 0x525, SV),
    usage("DataFieldMinute", 0x526, SV),
    usage("DataFieldSecond", 0x527, SV),
    usage("DataFieldMillisecond", 0x528, SV),
    usage("DataFieldTimestamp", 0x529, SV),
    usage("DataFieldJulianDayOfYear", 0x52A, SV),
    usage("DataFieldTimeSinceSystemBoot", 0x52B, SV),
    usage("PropertyTime", 0x530, DV),
    usage("PropertyTimeZoneOffsetFromUtc", 0x531, DV),
    usage("PropertyTimeZoneName", 0x532, DV),
    usage("PropertyDaylightSavingsTimeObserved", 0x533, DF),
    usage("PropertyTimeTrimAdjustment", 0x534, DV),
    usage("PropertyArmAlarm", 0x535, DF),
    usage("DataFieldCustom", 0x540, DV),
    usage("DataFieldCustomUsage", 0x541, SV),
    usage("DataFieldCustomBooleanArray", 0x542, SV),
    usage("DataFieldCustomValue", 0x543, SV),
    usage("DataFieldCustomValue1", 0x544, SV),
    usage("DataFieldCustomValue2", 0x545, SV),
    usage("DataFieldCustomValue3", 0x546, SV),
    usage("DataFieldCustomValue4", 0x547, SV),
    usage("DataFieldCustomValue5", 0x548, SV),
    usage("DataFieldCustomValue6", 0x549, SV),
    usage("DataFieldCustomValue7", 0x54A, SV),
    usage("DataFieldCustomValue8", 0x54B, SV),
    usage("DataFieldCustomValue9", 0x54C, SV),
    usage("DataFieldCustomValue10", 0x54D, SV),
    usage("DataFieldCustomValue11", 0x54E, SV),
    usage("DataFieldCustomValue12", 0x54F, SV),
    usage("DataFieldCustomValue13", 0x550, SV),
    usage("DataFieldCustomValue14", 0x551, SV),
    usage("DataFieldCustomValue15", 0x552, SV),
    usage("DataFieldCustomValue16", 0x553, SV),
    usage("DataFieldCustomValue17", 0x554, SV),
    usage("DataFieldCustomValue18", 0x555, SV),
    usage("DataFieldCustomValue19", 0x556, SV),
    usage("DataFieldCustomValue20", 0x557, SV),
    usage("DataFieldCustomValue21", 0x558, SV),
    usage("DataFieldCustomValue22", 0x559, SV),
    usage("DataFieldCustomValue23", 0x55A, SV),
    usage("DataFieldCustomValue24", 0x55B, SV),
    usage("DataFieldCustomValue25", 0x55C, SV),
    usage("DataFieldCustomValue26", 0x55D, SV),
    usage("DataFieldCustomValue27", 0x55E, SV),
    usage("DataFieldCustomValue28", 0x55F, SV),
    usage("DataFieldGeneric", 0x560, DV),
    usage("DataFieldGenericGuidOrPropertykey", 0x561, SV),
    usage("DataFieldGenericCategoryGuid", 0x562, SV),
    usage("DataFieldGenericTypeGuid", 0x563, SV),
    usage("DataFieldGenericEventPropertykey", 0x564, SV),
    usage("DataFieldGenericPropertyPropertykey", 0x565, SV),
    usage("DataFieldGenericDataFieldPropertykey", 0x566, SV),
    usage("DataFieldGenericEvent", 0x567, SV),
    usage("DataFieldGenericProperty", 0x568, SV),
    usage("DataFieldGenericDataField", 0x569, SV),
    usage("DataFieldEnumeratorTableRowIndex", 0x56A, SV),
    usage("DataFieldEnumeratorTableRowCount", 0x56B, SV),
    usage("DataFieldGenericGuidOrPropertykeyKind", 0x56C, NARY),
    usage("DataFieldGenericGuid", 0x56D, SV),
    usage("DataFieldGenericPropertykey", 0x56E, SV),
    usage("DataFieldGenericTopLevelCollectionId", 0x56F, SV),
    usage("DataFieldGenericReportId", 0x570, SV),
    usage("DataFieldGenericReportItemPositionIndex", 0x571, SV),
    usage("DataFieldGenericFirmwareVartype", 0x572, NARY),
    usage("DataFieldGenericUnitOfMessure", 0x573, NARY),
    usage("DataFieldGenericUnitExponent", 0x574, NARY),
    usage("DataFieldGenericReportSize", 0x575, SV),
    usage("DataFieldGenericReportCount", 0x576, SV),
    usage("PropertyGeneric", 0x580, DV),
    usage("PropertyEnumeratorTableRowIndex", 0x581, DV),
    usage("PropertyEnumeratorTableRowCount", 0x582, SV),
    usage("DataFieldPersonalActivity", 0x590, DV),
    usage("DataFieldActivityType", 0x591, NARY),
    usage("DataFieldActivityState", 0x592, NARY),
    usage("DataFieldDevicePosition", 0x593, NARY),
    usage("DataFieldStepCount", 0x594, SV),
    usage("DataFieldStepCountReset", 0x595, DF),
    usage("DataFieldStepDuration", 0x596, SV),
    usage("DataFieldStepType", 0x597, NARY),
    usage("PropertyMinimumActivityDetectionInterval", 0x5A0, DV),
    usage("PropertySupportedActivityTypes", 0x5A1, NARY),
    usage("PropertySubscribedActivityTypes", 0x5A2, NARY),
    usage("PropertySupportedStepTypes", 0x5A3, NARY),
    usage("PropertySubscribedStepTypes", 0x5A4, NARY),
    usage("PropertyFloorHeight", 0x5A5, DV),
    usage("DataFieldCustomTypeId", 0x5B0, SV),
    usage("PropertyCustom", 0x5C0, DV),
    usage("PropertyCustomValue1", 0x5C1, DV),
    usage("PropertyCustomValue2", 0x5C2, DV),
    usage("PropertyCustomValue3", 0x5C3, DV),
    usage("PropertyCustomValue4", 0x5C4, DV),
    usage("PropertyCustomValue5", 0x5C5, DV),
    usage("PropertyCustomValue6", 0x5C6, DV),
    usage("PropertyCustomValue7", 0x5C7, DV),
    usage("PropertyCustomValue8", 0x5C8, DV),
    usage("PropertyCustomValue9", 0x5C9, DV),
    usage("PropertyCustomValue10", 0x5CA, DV),
    usage("PropertyCustomValue11", 0x5CB, DV),
    usage("PropertyCustomValue12", 0x5CC, DV),
    usage("PropertyCustomValue13", 0x5CD, DV),
    usage("PropertyCustomValue14", 0x5CE, DV),
    usage("PropertyCustomValue15", 0x5CF, DV),
    usage("PropertyCustomValue16", 0x5D0, DV),
    usage("DataFieldHinge", 0x5E0, SV | DV),
    usage("DataFieldHingeAngle", 0x5E1, SV | DV),
    usage("DataFieldGestureSensor", 0x5F0, DV),
    usage("DataFieldGestureState", 0x5F1, NARY),
    usage("DataFieldHingeFoldInitialAngle", 0x5F2, SV),
    usage("DataFieldHingeFoldFinalAngle", 0x5F3, SV),
    usage("DataFieldHingeFoldContributionPanel", 0x5F4, NARY),
    usage("DataFieldHingeFoldType", 0x5F5, NARY),
    usage("SensorStateUndefined", 0x800, SEL),
    usage("SensorStateReady", 0x801, SEL),
    usage("SensorStateNotAvailable", 0x802, SEL),
    usage("SensorStateNoData", 0x803, SEL),
    usage("SensorStateInitializing", 0x804, SEL),
    usage("SensorStateAccessDenied", 0x805, SEL),
    usage("SensorStateError", 0x806, SEL),
    usage("SensorEventUnknown", 0x810, SEL),
    usage("SensorEventStateChanged", 0x811, SEL),
    usage("SensorEventPropertyChanged", 0x812, SEL),
    usage("SensorEventDataUploaded", 0x813, SEL),
    usage("SensorEventPollResponse", 0x814, SEL),
    usage("SensorEventChangeSensitivity", 0x815, SEL),
    usage("SensorEventRangeMaximumReached", 0x816, SEL),
    usage("SensorEventRangeMinimumReached", 0x817, SEL),
    usage("SensorEventHighThresholdCrossUpward", 0x818, SEL),
    usage("SensorEventHighThresholdCrossDownward", 0x819, SEL),
    usage("SensorEventLowThresholdCrossUpward", 0x81A, SEL),
    usage("SensorEventLowThresholdCrossDownward", 0x81B, SEL),
    usage("SensorEventZeroThresholdCrossUpward", 0x81C, SEL),
    usage("SensorEventZeroThresholdCrossDownward", 0x81D, SEL),
    usage("SensorEventPeriodExceeded", 0x81E, SEL),
    usage("SensorEventFrequencyExceeded", 0x81F, SEL),
    usage("SensorEventComplexTrigger", 0x820, SEL),
    usage("ConnectionTypePcIntegrated", 0x830, SEL),
    usage("ConnectionTypePcAttached", 0x831, SEL),
    usage("ConnectionTypePcExternal", 0x832, SEL),
    usage("ReportingStateReportNoEvents", 0x840, SEL),
    usage("ReportingStateReportAllEvents", 0x841, SEL),
    usage("ReportingStateReportThresholdEvents", 0x842, SEL),
    usage("ReportingStateWakeOnNoEvents", 0x843, SEL),
    usage("ReportingStateWakeOnAllEvents", 0x844, SEL),
    usage("ReportingStateWakeOnThresholdEvents", 0x845, SEL),
    usage("PowerStateUndefined", 0x850, SEL),
    usage("PowerStateD0FullPower", 0x851, SEL),
    usage("PowerStateD1LowPower", 0x852, SEL),
    usage("PowerStateD2StandbyPowerWithWakeup", 0x853, SEL),
    usage("PowerStateD3SleepWithWakeup", 0x854, SEL),
    usage("PowerStateD4PowerOff", 0x855, SEL),
    usage("FixQualityNoFix", 0x870, SEL),
    usage("FixQualityGps", 0x871, SEL),
    usage("FixQualityDgps", 0x872, SEL),
    usage("FixTypeNoFix", 0x880, SEL),
    usage("FixTypeGpsSpsModeFixValid", 0x881, SEL),
    usage("FixTypeDgpsSpsModeFixValid", 0x882, SEL),
    usage("FixTypeGpsPpsModeFixValid", 0x883, SEL),
    usage("FixTypeRealTimeKinematic", 0x884, SEL),
    usage("FixTypeFloatRtk", 0x885, SEL),
    usage("FixTypeEstimatedDeadReckoned", 0x886, SEL),
    usage("FixTypeManualInputMode", 0x887, SEL),
    usage("FixTypeSimulatorMode", 0x888, SEL),
    usage("GpsOperationModeManual", 0x890, SEL),
    usage("GpsOperationModeAutomatic", 0x891, SEL),
    usage("GpsSelectionModeAutonomous", 0x8A0, SEL),
    usage("GpsSelectionModeDgps", 0x8A1, SEL),
    usage("GpsSelectionModeEstimatedDeadReckoned", 0x8A2, SEL),
    usage("GpsSelectionModeManualInput", 0x8A3, SEL),
    usage("GpsSelectionModeSimulator", 0x8A4, SEL),
    usage("GpsSelectionModeDataNotValid", 0x8A5, SEL),
    usage("GpsStatusDataValid", 0x8B0, SEL),
    usage("GpsStatusDataNotValid", 0x8B1, SEL),
    usage("AccuracyDefault", 0x860, SEL),
    usage("AccuracyHigh", 0x861, SEL),
    usage("AccuracyMedium", 0x862, SEL),
    usage("AccuracyLow", 0x863, SEL),
    usage("DayOfWeekSunday", 0x8C0, SEL),
    usage("DayOfWeekMonday", 0x8C1, SEL),
    usage("DayOfWeekTuesday", 0x8C2, SEL),
    usage("DayOfWeekWednesday", 0x8C3, SEL),
    usage("DayOfWeekThursday", 0x8C4, SEL),
    usage("DayOfWeekFriday", 0x8C5, SEL),
    usage("DayOfWeekSaturday", 0x8C6, SEL),
    usage("KindCategory", 0x8D0, SEL),
    usage("KindType", 0x8D1, SEL),
    usage("KindEvent", 0x8D2, SEL),
    usage("KindProperty", 0x8D3, SEL),
    usage("KindDataField", 0x8D4, SEL),
    usage("MagnetometerAccuracyLow", 0x8E0, SEL),
    usage("MagnetometerAccuracyMedium", 0x8E1, SEL),
    usage("MagnetometerAccuracyHigh", 0x8E2, SEL),
    usage("SimpleOrientationDirectionNotRotated", 0x8F0, SEL),
    usage("SimpleOrientationDirectionRotated90DegreesCcw", 0x8F1, SEL),
    usage("SimpleOrientationDirectionRotated180DegreesCcw", 0x8F2, SEL),
    usage("SimpleOrientationDirectionRotated270DegreesCcw", 0x8F3, SEL),
    usage("SimpleOrientationDirectionFaceUp", 0x8F4, SEL),
    usage("SimpleOrientationDirectionFaceDown", 0x8F5, SEL),
    usage("VtNull", 0x900, SEL),
    usage("VtBool", 0x901, SEL),
    usage("VtUi1", 0x902, SEL),
    usage("VtI1", 0x903, SEL),
    usage("VtUi2", 0x904, SEL),
    usage("VtI2", 0x905, SEL),
    usage("VtUi4", 0x906, SEL),
    usage("VtI4", 0x907, SEL),
    usage("VtUi8", 0x908, SEL),
    usage("VtI8", 0x909, SEL),
    usage("VtR4", 0x90A, SEL),
    usage("VtR8", 0x90B, SEL),
    usage("VtWstr", 0x90C, SEL),
    usage("VtStr", 0x90D, SEL),
    usage("VtClsid", 0x90E, SEL),
    usage("VtVectorVtUi1", 0x90F, SEL),
    usage("VtF16E0", 0x910, SEL),
    usage("VtF16E1", 0x911, SEL),
    usage("VtF16E2", 0x912, SEL),
    usage("VtF16E3", 0x913, SEL),
    usage("VtF16E4", 0x914, SEL),
    usage("VtF16E5", 0x915, SEL),
    usage("VtF16E6", 0x916, SEL),
    usage("VtF16E7", 0x917, SEL),
    usage("VtF16E8", 0x918, SEL),
    usage("VtF16E9", 0x919, SEL),
    usage("VtF16EA", 0x91A, SEL),
    usage("VtF16EB", 0x91B, SEL),
    usage("VtF16EC", 0x91C, SEL),
    usage("VtF16ED", 0x91D, SEL),
    usage("VtF16EE", 0x91E, SEL),
    usage("VtF16EF", 0x91F, SEL),
    usage("VtF32E0", 0x920, SEL),
    usage("VtF32E1", 0x921, SEL),
    usage("VtF32E2", 0x922, SEL),
    usage("VtF32E3", 0x923, SEL),
    usage("VtF32E4", 0x924, SEL),
    usage("VtF32E5", 0x925, SEL),
    usage("VtF32E6", 0x926, SEL),
    usage("VtF32E7", 0x927, SEL),
    usage("VtF32E8", 0x928, SEL),
    usage("VtF32E9", 0x929, SEL),
    usage("VtF32EA", 0x92A, SEL),
    usage("VtF32EB", 0x92B, SEL),
    usage("VtF32EC", 0x92C, SEL),
    usage("VtF32ED", 0x92D, SEL),
    usage("VtF32EE", 0x92E, SEL),
    usage("VtF32EF", 0x92F, SEL),
    usage("ActivityTypeUnknown", 0x930, SEL),
    usage("ActivityTypeStationary", 0x931, SEL),
    usage("ActivityTypeFidgeting", 0x932, SEL),
    usage("ActivityTypeWalking", 0x933, SEL),
    usage("ActivityTypeRunning", 0x934, SEL),
    usage("ActivityTypeInVehicle", 0x935, SEL),
    usage("ActivityTypeBiking", 0x936, SEL),
    usage("ActivityTypeIdle", 0x937, SEL),
    usage("UnitNotSpecified", 0x940, SEL),
    usage("UnitLux", 0x941, SEL),
    usage("UnitDegreesKelvin", 0x942, SEL),
    usage("UnitDegreesCelsius", 0x943, SEL),
    usage("UnitPascal", 0x944, SEL),
    usage("UnitNewton", 0x945, SEL),
    usage("UnitMetersPerSecond", 0x946, SEL),
    usage("UnitKilogram", 0x947, SEL),
    usage("UnitMeter", 0x948, SEL),
    usage("UnitMetersPerSecondSquared", 0x949, SEL),
    usage("UnitFarad", 0x94A, SEL),
    usage("UnitAmpere", 0x94B, SEL),
    usage("UnitWatt", 0x94C, SEL),
    usage("UnitHenry", 0x94D, SEL),
    usage("UnitOhm", 0x94E, SEL),
    usage("UnitVolt", 0x94F, SEL),
    usage("UnitHerz", 0x950, SEL),
    usage("UnitBar", 0x951, SEL),
    usage("UnitDegreesAntiClockwise", 0x952, SEL),
    usage("UnitDegreesClockwise", 0x953, SEL),
    usage("UnitDegrees", 0x954, SEL),
    usage("UnitDegreesPerSecond", 0x955, SEL),
    usage("UnitDegreesPerSecondSquared", 0x956, SEL),
    usage("UnitKnot", 0x957, SEL),
    usage("UnitPercent", 0x958, SEL),
    usage("UnitSecond", 0x959, SEL),
    usage("UnitMillisecond", 0x95A, SEL),
    usage("UnitG", 0x95B, SEL),
    usage("UnitBytes", 0x95C, SEL),
    usage("UnitMilligauss", 0x95D, SEL),
    usage("UnitBits", 0x95E, SEL),
    usage("ActivityStateNoStateChange", 0x960, SEL),
    usage("ActivityStateStartActivity", 0x961, SEL),
    usage("ActivityStateEndActivity", 0x962, SEL),
    usage("Exponent0", 0x970, SEL),
    usage("Exponent1", 0x971, SEL),
    usage("Exponent2", 0x972, SEL),
    usage("Exponent3", 0x973, SEL),
    usage("Exponent4", 0x974, SEL),
    usage("Exponent5", 0x975, SEL),
    usage("Exponent6", 0x976, SEL),
    usage("Exponent7", 0x977, SEL),
    usage("Exponent8", 0x978, SEL),
    usage("Exponent9", 0x979, SEL),
    usage("ExponentA", 0x97A, SEL),
    usage("ExponentB", 0x97B, SEL),
    usage("ExponentC", 0x97C, SEL),
    usage("ExponentD", 0x97D, SEL),
    usage("ExponentE", 0x97E, SEL),
    usage("ExponentF", 0x97F, SEL),
    usage("DevicePositionUnknown", 0x980, SEL),
    usage("DevicePositionUnchanged", 0x981, SEL),
    usage("DevicePositionOnDesk", 0x982, SEL),
    usage("DevicePositionInHand", 0x983, SEL),
    usage("DevicePositionMovingInBag", 0x984, SEL),
    usage("DevicePositionStationaryInBag", 0x985, SEL),
    usage("StepTypeUnknown", 0x990, SEL),
    usage("StepTypeRunning", 0x991, SEL),
    usage("StepTypeWalking", 0x992, SEL),
    usage("GestureStateUnknown", 0x9A0, SEL),
    usage("GestureStateStarted", 0x9A1, SEL),
    usage("GestureStateCompleted", 0x9A2, SEL),
    usage("GestureStateCancelled", 0x9A3, SEL),
    usage("HingeFoldContributionPanelUnknown", 0x9B0, SEL),
    usage("HingeFoldContributionPanelPanel1", 0x9B1, SEL),
    usage("HingeFoldContributionPanelPanel2", 0x9B2, SEL),
    usage("HingeFoldContributionPanelBoth", 0x9B3, SEL),
    usage("HingeFoldTypeUnknown", 0x9B4, SEL),
    usage("HingeFoldTypeIncreasing", 0x9B5, SEL),
    usage("HingeFoldTypeDecreasing", 0x9B6, SEL),
    usage("ModifierChangeSensitivityAbsolute", 0x1000, US),
    usage("ModifierMaximum", 0x2000, US),
    usage("ModifierMinimum", 0x3000, US),
    usage("ModifierAccuracy", 0x4000, US),
    usage("ModifierResolution", 0x5000, US),
    usage("ModifierThresholdHigh", 0x6000, US),
    usage("ModifierThresholdLow", 0x7000, US),
    usage("ModifierCalibrationOffset", 0x8000, US),
    usage("ModifierCalibrationMultiplier", 0x9000, US),
    usage("ModifierReportInterval", 0xA000, US),
    usage("ModifierFrequencyMax", 0xB000, US),
    usage("ModifierPeriodMax", 0xC000, US),
    usage("ModifierChangeSensitivityPercentOfRange", 0xD000, US),
    usage("ModifierChangeSensitivityPercentRelative", 0xE000, US),
    usage("ModifierVendorReserved", 0xF000, US),
];

/// Medical Instrument page, HID Usage Tables 1.2 ch. 22.
pub(crate) const MEDICAL_INSTRUMENT: &[Entry] = &[
    usage("MedicalUlrasound", 0x01, CA),
    usage("VcrAcquisition", 0x20, OOC),
    usage("FreezeThaw", 0x21, OOC),
    usage("ClipStore", 0x22, OSC),
    usage("Update", 0x23, OSC),
    usage("Next", 0x24, OSC),
    usage("Save", 0x25, OSC),
    usage("Print", 0x26, OSC),
    usage("MicrophoneEnable", 0x27, OSC),
    usage("Cine", 0x40, LC),
    usage("TransmitPower", 0x41, LC),
    usage("Volume", 0x42, LC),
    usage("Focus", 0x43, LC),
    usage("Depth", 0x44, LC),
    usage("SoftStepPrimary", 0x60, LC),
    usage("SoftStepSecondary", 0x61, LC),
    usage("DepthGainCompensation", 0x70, LC),
    usage("ZoomSelect", 0x80, OSC),
    usage("ZoomAdjust", 0x81, LC),
    usage("SpectralDopplerModeSelect", 0x82, OSC),
    usage("SpectralDopplerAdjust", 0x83, LC),
    usage("ColorDopplerModeSelect", 0x84, OSC),
    usage("ColorDopplerAdjust", 0x85, LC),
    usage("MotionModeSelect", 0x86, OSC),
    usage("MotionModeAdjust", 0x87, LC),
    usage("Mode2dSelect", 0x88, OSC),
    usage("Mode2dAdjust", 0x89, LC),
    usage("SoftControlSelect", 0xA0, OSC),
    usage("SoftControlAdjust", 0xA1, LC),
];

/// Braille Display page, HID Usage Tables 1.2 ch. 23.
pub(crate) const BRAILLE_DISPLAY: &[Entry] = &[
    usage("BrailleDisplay", 0x01, CA),
    usage("BrailleRow", 0x02, NARY),
    usage("Dot8BrailleCell", 0x03, DV),
    usage("Dot6BrailleCell", 0x04, DV),
    usage("NumberOfBrailleCells", 0x05, DV),
    usage("ScreenReaderControl", 0x06, NARY),
    usage("ScreenReaderIdentifier", 0x07, DV),
    usage("RouterSet1", 0xFA, NARY),
    usage("RouterSet2", 0xFB, NARY),
    usage("RouterSet3", 0xFC, NARY),
    usage("RouterKey", 0x100, SEL),
    usage("RowRouterKey", 0x101, SEL),
    usage("BrailleButtons", 0x200, NARY),
    usage("BrailleKeyboardDot1", 0x201, SEL),
    usage("BrailleKeyboardDot2", 0x202, SEL),
    usage("BrailleKeyboardDot3", 0x203, SEL),
    usage("BrailleKeyboardDot4", 0x204, SEL),
    usage("BrailleKeyboardDot5", 0x205, SEL),
    usage("BrailleKeyboardDot6", 0x206, SEL),
    usage("BrailleKeyboardDot7", 0x207, SEL),
    usage("BrailleKeyboardDot8", 0x208, SEL),
    usage("BrailleKeyboardSpace", 0x209, SEL),
    usage("BrailleKeyboardLeftSpace", 0x20A, SEL),
    usage("BrailleKeyboardRightSpace", 0x20B, SEL),
    usage("BrailleFaceConrols", 0x20C, NARY),
    usage("BrailleLeftControls", 0x20D, NARY),
    usage("BrailleRightControls", 0x20E, NARY),
    usage("BrailleTopControls", 0x20F, NARY),
    usage("BrailleJoystickCenter", 0x210, SEL),
    usage("BrailleJoystickUp", 0x211, SEL),
    usage("BrailleJoystickDown", 0x212, SEL),
    usage("BrailleJoystickLeft", 0x213, SEL),
    usage("BrailleJoystickRight", 0x214, SEL),
    usage("BrailleDPadCenter", 0x215, SEL),
    usage("BrailleDPadUp", 0x216, SEL),
    usage("BrailleDPadDown", 0x217, SEL),
    usage("BrailleDPadLeft", 0x218, SEL),
    usage("BrailleDPadRight", 0x219, SEL),
    usage("BraillePanLeft", 0x21A, SEL),
    usage("BraillePanRight", 0x21B, SEL),
    usage("BrailleRockerUp", 0x21C, SEL),
    usage("BrailleRockerDown", 0x21D, SEL),
    usage("BrailleRockerPress", 0x21E, SEL),
];

/// Lighting and Illumination page, HID Usage Tables 1.2 ch. 24.
pub(crate) const LIGHTING: &[Entry] = &[
    usage("LampArray", 0x01, CA),
    usage("LampArrayAttributesReport", 0x02, CL),
    usage("LampCount", 0x03, SV | DV),
    usage("BoundingBoxWidthInMicrometers", 0x04, SV),
    usage("BoundingBoxHeightInMicrometers", 0x05, SV),
    usage("BoundingBoxDepthInMicrometers", 0x06, SV),
    usage("LampArrayKind", 0x07, SV),
    usage("MinUpdateIntervalInMicroseconds", 0x08, SV),
    usage("LampAtributesRequestReport", 0x20, CL),
    usage("LampId", 0x21, SV | DV),
    usage("LampAtributesResponseReport", 0x22, CL),
    usage("PositionXInMicrometers", 0x23, DV),
    usage("PositionYInMicrometers", 0x24, DV),
    usage("PositionZInMicrometers", 0x25, DV),
    usage("LampPurposes", 0x26, DV),
    usage("UpdateLatencyInMicroseconds", 0x27, DV),
    usage("RedLevelCount", 0x28, DV),
    usage("GreenLevelCount", 0x29, DV),
    usage("BlueLevelCount", 0x2A, DV),
    usage("IntensityLevelCount", 0x2B, DV),
    usage("IsProgrammable", 0x2C, DV),
    usage("InputBinding", 0x2D, DV),
    usage("LampMultiUpdateReport", 0x50, CL),
    usage("RedUpdateChannel", 0x51, DV),
    usage("GreenUpdateChannel", 0x52, DV),
    usage("BlueUpdateChannel", 0x53, DV),
    usage("IntensityUpdateChannel", 0x54, DV),
    usage("LampUpdateFlags", 0x55, DV),
    usage("LampRangeUpdateReport", 0x60, CL),
    usage("LampIdStart", 0x61, DV),
    usage("LampIdEnd", 0x62, DV),
    usage("LampArrayControlReport", 0x70, CL),
    usage("AutonomousMode", 0x71, DV),
];

/// Monitor page, Monitor Control Class Specification 1.0 ch. 6.1.1.
pub(crate) const MONITOR: &[Entry] = &[
    usage("MonitorControl", 0x01, NONE),
    usage("EdidInformation", 0x02, NONE),
    usage("VdifInformation", 0x03, NONE),
    usage("VesaVersion", 0x04, NONE),
];

/// Monitor Enumerated Values page, Monitor Control Class Specification 1.0 ch. 6.2.
pub(crate) const MONITOR_ENUMERATED: &[Entry] = &[
    // Enum0 through Enum62
    usage("Enum#", 0x00, NONE),
    usage("Enum#", 0x3E, NONE),
];

/// VESA Virtual Controls page, Monitor Control Class Specification 1.0 ch. 6.3.
pub(crate) const VESA_VIRTUAL_CONTROLS: &[Entry] = &[
    // Contiguous Controls
    usage("Brightness", 0x10, NONE),
    usage("Contrast", 0x12, NONE),
    usage("RedVideoGain", 0x16, NONE),
    usage("GreenVideoGain", 0x18, NONE),
    usage("BlueVideoGain", 0x1A, NONE),
    usage("Focus", 0x1C, NONE),
    usage("HorizontalPosition", 0x20, NONE),
    usage("HorizontalSize", 0x22, NONE),
    usage("HorizontalPincushion", 0x24, NONE),
    usage("HorizontalPincushionBalance", 0x26, NONE),
    usage("HorizontalMisconvergence", 0x28, NONE),
    usage("HorizontalLinearity", 0x2A, NONE),
    usage("HorizontalLinearityBalance", 0x2C, NONE),
    usage("VerticalPosition", 0x30, NONE),
    usage("VerticalSize", 0x32, NONE),
    usage("VerticalPincushion", 0x34, NONE),
    usage("VerticalPincushionBalance", 0x36, NONE),
    usage("VerticalMisconvergence", 0x38, NONE),
    usage("VerticalLinearity", 0x3A, NONE),
    usage("VerticalLinearityBalance", 0x3C, NONE),
    usage("ParallelogramDistortionKeyBalance", 0x40, NONE),
    usage("TrapezoidalDistortionKey", 0x42, NONE),
    usage("TiltRotation", 0x44, NONE),
    usage("TopCornerDistortionControl", 0x46, NONE),
    usage("TopCornerDistortionBalance", 0x48, NONE),
    usage("BottomCornerDistortionControl", 0x4A, NONE),
    usage("BottomCornerDistortionBalance", 0x4C, NONE),
    usage("HorizontalMoire", 0x56, NONE),
    usage("VerticalMoire", 0x58, NONE),
    usage("RedVideoBlackLevel", 0x6C, NONE),
    usage("GreenVideoBlackLevel", 0x6E, NONE),
    usage("BlueVideoBlackLevel", 0x70, NONE),
    // Non-contiguous Controls (Read/Write)
    usage("InputLevelSelect", 0x5E, NONE),
    usage("InputSourceSelect", 0x60, NONE),
    usage("OnScreenDisplay", 0xCA, NONE),
    usage("StereoMode", 0xD4, NONE),
    // Non-contiguous Controls (Read-only)
    usage("AutoSizeCenter", 0xA2, NONE),
    usage("PolarityHorizontalSynchronization", 0xA4, NONE),
    usage("PolarityVerticalSynchronization", 0xA6, NONE),
    usage("SynchronizationType", 0xA8, NONE),
    usage("ScreenOrientation", 0xAA, NONE),
    usage("HorizontalFrequency", 0xAC, NONE),
    usage("VerticalFrequency", 0xAE, NONE),
    usage("Degauss", 0x01, NONE),
    usage("Settings", 0xB0, NONE),
];

/// Power Device page, Usage Tables for HID Power Devices 1.0 ch. 4.1.
pub(crate) const POWER_DEVICE: &[Entry] = &[
    usage("IName", 0x01, SV),
    usage("PresentStatus", 0x02, CL),
    usage("ChangedStatus", 0x03, CL),
    usage("Ups", 0x04, CA),
    usage("PowerSupply", 0x05, CA),
    usage("BatterySystem", 0x10, CP),
    usage("BatterySystemId", 0x11, SV),
    usage("Battery", 0x12, CP),
    usage("BatteryId", 0x13, SV),
    usage("Charger", 0x14, CP),
    usage("ChargerId", 0x15, SV),
    usage("PowerConverer", 0x16, CP),
    usage("PowerConvererId", 0x17, SV),
    usage("OutletSystem", 0x18, CP),
    usage("OutletSystemId", 0x19, SV),
    usage("Input", 0x1A, CP),
    usage("InputId", 0x1B, SV),
    usage("Output", 0x1C, CP),
    usage("OutputId", 0x1D, SV),
    usage("Flow", 0x1E, CP),
    usage("FlowId", 0x1F, SV),
    usage("Outlet", 0x20, CP),
    usage("OutletId", 0x21, SV),
    usage("Gang", 0x22, CL | CP),
    usage("GangId", 0x23, SV),
    usage("PowerSummary", 0x24, CL | CP),
    usage("PowerSummaryId", 0x25, SV),
    usage("Voltage", 0x30, DV),
    usage("Current", 0x31, DV),
    usage("Frequency", 0x32, DV),
    usage("ApparentPower", 0x33, DV),
    usage("ActivePower", 0x34, DV),
    usage("PercentLoad", 0x35, DV),
    usage("Temperature", 0x36, DV),
    usage("Humidity", 0x37, DV),
    usage("BadCount", 0x38, DV),
    usage("ConfigVoltage", 0x40, SV | DV),
    usage("ConfigCurrent", 0x41, SV | DV),
    usage("ConfigFrequency", 0x42, SV | DV),
    usage("ConfigApparentPower", 0x43, SV | DV),
    usage("ConfigActivePower", 0x44, SV | DV),
    usage("ConfigPercentLoad", 0x45, SV | DV),
    usage("ConfigTemperature", 0x46, SV | DV),
    usage("ConfigHumidity", 0x47, SV | DV),
    usage("SwitchOnControl", 0x50, DV),
    usage("SwitchOffControl", 0x51, DV),
    usage("ToggleControl", 0x52, DV),
    usage("LowVoltageTransfer", 0x53, DV),
    usage("HighVoltageTransfer", 0x54, DV),
    usage("DelayBeforeReboot", 0x55, DV),
    usage("DelayBeforeStartup", 0x56, DV),
    usage("DelayBeforeShutdown", 0x57, DV),
    usage("Test", 0x58, DV),
    usage("ModuleReset", 0x59, DV),
    usage("AudibleAlarmControl", 0x5A, DV),
    usage("Present", 0x60, DF),
    usage("Good", 0x61, DF),
    usage("InternalFailure", 0x62, DF),
    usage("VoltageOutOfRange", 0x63, DF),
    usage("FrequencyOutOfRange", 0x64, DF),
    usage("Overload", 0x65, DF),
    usage("OverCharged", 0x66, DF),
    usage("OverTemperature", 0x67, DF),
    usage("ShutdownRequested", 0x68, DF),
    usage("ShutdownImminent", 0x69, DF),
    usage("SwitchOnOff", 0x6B, DF),
    usage("Switchable", 0x6C, DF),
    usage("Used", 0x6D, DF),
    usage("Boost", 0x6E, DF),
    usage("Buck", 0x6F, DF),
    usage("Initialized", 0x70, DF),
    usage("Tested", 0x71, DF),
    usage("AwaitingPower", 0x72, DF),
    usage("CommunicationLost", 0x73, DF),
    usage("IManufacturer", 0xFD, SV),
    usage("IProduct", 0xFE, SV),
    usage("ISerialNumber", 0xFF, SV),
];

/// Bar Code Scanner page, HID Point of Sale Usage Tables 1.02 ch. 3.
pub(crate) const BARCODE_SCANNER: &[Entry] = &[
    usage("BarCodeBadgeReader", 0x01, CA),
    usage("BarCodeScanner", 0x02, CA),
    usage("DumbBarCodeScanner", 0x03, CA),
    usage("CordlessScannerBase", 0x04, CA),
    usage("BarCodeScannerCradle", 0x05, CA),
    usage("AttributeReport", 0x10, CL),
    usage("SettingsReport", 0x11, CL),
    usage("ScannedDataReport", 0x12, CL),
    usage("RawScannedDataReport", 0x13, CL),
    usage("TriggerReport", 0x14, CL),
    usage("StatusReport", 0x15, CL),
    usage("UpsEanControlReport", 0x16, CL),
    usage("Ean23LabelControlReport", 0x17, CL),
    usage("Code39ControlReport", 0x18, CL),
    usage("Interleaved2Of5ControlReport", 0x19, CL),
    usage("Standard2Of5ConrolReport", 0x1A, CL),
    usage("MsiPlesseyControlReport", 0x1B, CL),
    usage("CodabarControlReport", 0x1C, CL),
    usage("Code128ControlReport", 0x1D, CL),
    usage("Misc2dConrolReport", 0x1E, CL),
    usage("Control2dReport", 0x1F, CL),
    usage("AimingPoinerMode", 0x30, SF),
    usage("BarCodePresentSensor", 0x31, SF),
    usage("Class1aLaser", 0x32, SF),
    usage("Class2Laser", 0x33, SF),
    usage("HeaterPresent", 0x34, SF),
    usage("ContactScanner", 0x35, SF),
    usage("ElectronicArticleSurveillanceNotification", 0x36, SF),
    usage("ConstantElectronicArticleSurveillance", 0x37, SF),
    usage("ErrorIndication", 0x38, SF),
    usage("FixedBeeper", 0x39, SF),
    usage("GoodDecoderIndication", 0x3A, SF),
    usage("HandsFreeScanning", 0x3B, SF),
    usage("IntrinsicallySafe", 0x3C, SF),
    usage("KlasseEinsLaser", 0x3D, SF),
    usage("LongRangeScanner", 0x3E, SF),
    usage("MirrorSpeedControl", 0x3F, SF),
    usage("NotOnFileIndication", 0x40, SF),
    usage("ProgrammableBeeper", 0x41, SF),
    usage("Triggerless", 0x42, SF),
    usage("Wand", 0x43, SF),
    usage("WaterResistant", 0x44, SF),
    usage("MultiRangeScanner", 0x45, SF),
    usage("ProximitySensor", 0x46, SF),
    usage("FragmentDecoder", 0x4D, DF),
    usage("ScannerReadConfidence", 0x4E, DV),
    usage("DataPrefix", 0x4F, NARY),
    usage("PrefixAimi", 0x50, SEL),
    usage("PrefixNone", 0x51, SEL),
    usage("PrefixProprietary", 0x52, SEL),
    usage("ActiveTime", 0x55, DV),
    usage("AimingLaserPattern", 0x56, DF),
    usage("BarCodePresent", 0x57, OOC),
    usage("BeeperState", 0x58, OOC),
    usage("LaserOnTime", 0x59, DV),
    usage("LaserState", 0x5A, OOC),
    usage("LockoutTime", 0x5B, DV),
    usage("MotorState", 0x5C, OOC),
    usage("MotorTimeout", 0x5D, DV),
    usage("PowerOnResetScanner", 0x5E, DF),
    usage("PreventReadOfBarcodes", 0x5F, DF),
    usage("InitiateBarcodeRead", 0x60, DF),
    usage("TriggerState", 0x61, OOC),
    usage("TriggerMode", 0x62, NARY),
    usage("TriggerModeBlinkingLaserOn", 0x63, SEL),
    usage("TriggerModeContinuousLaserOn", 0x64, SEL),
    usage("TriggerModeLaserOnWhilePulled", 0x65, SEL),
    usage("TriggerModeLaserStaysOnAfterTriggerRelease", 0x66, SEL),
    usage("CommitParametersToNvm", 0x6D, DF),
    usage("ParameterScanning", 0x6E, DF),
    usage("ParametersChanged", 0x6F, OOC),
    usage("SetParameterDefaultValues", 0x70, DF),
    usage("ScannerInCradle", 0x75, OOC),
    usage("ScannerInRange", 0x76, OOC),
    usage("AimDuration", 0x7A, DV),
    usage("GoodReadLampDuration", 0x7B, DV),
    usage("GoodReadLampIntensity", 0x7C, DV),
    usage("GoodReadLed", 0x7D, DF),
    usage("GoodReadToneFrequency", 0x7E, DV),
    usage("GoodReadToneLength", 0x7F, DV),
    usage("GoodReadToneVolume", 0x80, DV),
    usage("NoReadMessage", 0x82, DF),
    usage("NotOnFileVolume", 0x83, DV),
    usage("PowerupBeep", 0x84, DF),
    usage("SoundErrorBeep", 0x85, DF),
    usage("SoundGoodReadBeep", 0x86, DF),
    usage("SoundNotOnFileBeep", 0x87, DF),
    usage("GoodReadWhenToWrite", 0x88, NARY),
    usage("GrwtiAfterDecode", 0x89, SEL),
    usage("GrwtiBeepLampAferTransmit", 0x8A, SEL),
    usage("GrwtiNoBeepLampUseAtAll", 0x8B, SEL),
    usage("BooklandEan", 0x91, DF),
    usage("ConvertEan8To13Type", 0x92, DF),
    usage("ConvertUpcAToEan13", 0x93, DF),
    usage("ConvertUpcEToA", 0x94, DF),
    usage("Ean13", 0x95, DF),
    usage("Ean8", 0x96, DF),
    usage("Ean99128Mandatory", 0x97, DF),
    usage("Ean99P5128Optional", 0x98, DF),
    usage("UpcEan", 0x9A, DF),
    usage("UpcEanCouponCode", 0x9B, DF),
    usage("UpcEanPeriodicals", 0x9C, DV),
    usage("UpcA", 0x9D, DF),
    usage("UpcAWith128Mandatory", 0x9E, DF),
    usage("UpcAWith128Optional", 0x9F, DF),
    usage("UpcAWithP5Optional", 0xA0, DF),
    usage("UpcE", 0xA1, DF),
    usage("UpcE1", 0xA2, DF),
    usage("Periodical", 0xA9, NARY),
    usage("PeriodicalAutoDiscriminatePlus2", 0xAA, SEL),
    usage("PeriodicalOnlyDecodeWidthPlus2", 0xAB, SEL),
    usage("PeriodicalIgnorePlus2", 0xAC, SEL),
    usage("PeriodicalAutoDiscriminatePlus5", 0xAD, SEL),
    usage("PeriodicalOnlyDecodeWidthPlus5", 0xAE, SEL),
    usage("PeriodicalIgnorePlus5", 0xAF, SEL),
    usage("Check", 0xB0, NARY),
    usage("CheckDisablePrice", 0xB1, SEL),
    usage("CheckEnable4DigitPrice", 0xB2, SEL),
    usage("CheckEnable5DigitPrice", 0xB3, SEL),
    usage("CheckEnableEuropean4DigitPrice", 0xB4, SEL),
    usage("CheckEnableEuropean5DigitPrice", 0xB5, SEL),
    usage("EanTwoLabel", 0xB7, DF),
    usage("EanThreeLabel", 0xB8, DF),
    usage("Ean8FlagDigit1", 0xB9, DV),
    usage("Ean8FlagDigit2", 0xBA, DV),
    usage("Ean8FlagDigit3", 0xBB, DV),
    usage("Ean13FlagDigit1", 0xBC, DV),
    usage("Ean13FlagDigit2", 0xBD, DV),
    usage("Ean13FlagDigit3", 0xBE, DV),
    usage("AddEan23LabelDefinition", 0xBF, DF),
    usage("ClearAllEan23LabelDefinitions", 0xC0, DF),
    usage("Codabar", 0xC3, DF),
    usage("Code128", 0xC4, DF),
    usage("Code39", 0xC7, DF),
    usage("Code93", 0xC8, DF),
    usage("FullAsciiConversion", 0xC9, DF),
    usage("Interleaved2Of5", 0xCA, DF),
    usage("ItalianPharmacyCode", 0xCB, DF),
    usage("MsiPlessey", 0xCC, DF),
    usage("Standard2Of5Iata", 0xCD, DF),
    usage("Standard2Of5", 0xCE, DF),
    usage("TransmitStartStop", 0xD3, DF),
    usage("TriOptic", 0xD4, DF),
    usage("UccEan128", 0xD5, DF),
    usage("CheckDigit", 0xD6, NARY),
    usage("CheckDigitDisable", 0xD7, SEL),
    usage("CheckDigitEnableInerleaved2Of5Opcc", 0xD8, SEL),
    usage("CheckDigitEnableInterleaved2Of5Uss", 0xD9, SEL),
    usage("CheckDigitEnableStandard2Of5Opcc", 0xDA, SEL),
    usage("CheckDigitEnableStandard2Of5Uss", 0xDB, SEL),
    usage("CheckDigitEnableOneMsiPlessey", 0xDC, SEL),
    usage("CheckDigitEnableTwoMsiPlessey", 0xDD, SEL),
    usage("CheckDigitCodabarEnable", 0xDE, SEL),
    usage("CheckDigitCode39Enable", 0xDF, SEL),
    usage("TransmitCheckDigit", 0xF0, NARY),
    usage("DisableCheckDigitTransmit", 0xF1, SEL),
    usage("EnableCheckDigitTransmit", 0xF2, SEL),
    usage("SymbologyIdentifier1", 0xFB, DV),
    usage("SymbologyIdentifier2", 0xFC, DV),
    usage("SymbologyIdentifier3", 0xFD, DV),
    usage("DecodedData", 0xFE, DV),
    usage("DecodedDataContinued", 0xFF, DF),
    usage("BarSpaceData", 0x100, DV),
    usage("ScannerDataAccuracy", 0x101, DV),
    usage("RawDataPolarity", 0x102, NARY),
    usage("PolarityInvertedBarCode", 0x103, SEL),
    usage("PolarityNormalBarCode", 0x104, SEL),
    usage("MinimumLengthToDecode", 0x106, DV),
    usage("MaximumLengthToDecode", 0x107, DV),
    usage("FirstDiscreteLengthToDecode", 0x108, DV),
    usage("SecondDiscreteLengthToDecode", 0x109, DV),
    usage("DataLengthMethod", 0x10A, NARY),
    usage("DlMethodReadAny", 0x10B, SEL),
    usage("DlMethodCheckInRange", 0x10C, SEL),
    usage("DlMethodCheckForDiscrete", 0x10D, SEL),
    usage("AztecCode", 0x110, DF),
    usage("Bc412", 0x111, DF),
    usage("ChannelCode", 0x112, DF),
    usage("Code16", 0x113, DF),
    usage("Code32", 0x114, DF),
    usage("Code49", 0x115, DF),
    usage("CodeOne", 0x116, DF),
    usage("ColorCode", 0x117, DF),
    usage("DataMatrix", 0x118, DF),
    usage("MaxiCode", 0x119, DF),
    usage("MicroPdf", 0x11A, DF),
    usage("Pdf417", 0x11B, DF),
    usage("PosiCode", 0x11C, DF),
    usage("QrCode", 0x11D, DF),
    usage("SuperCode", 0x11E, DF),
    usage("UltraCode", 0x11F, DF),
    usage("Usd5SlugCode", 0x120, DF),
    usage("VeriCode", 0x121, DF),
];

/// Weighing Devices page, HID Point of Sale Usage Tables 1.02 ch. 4.
pub(crate) const WEIGHING_DEVICES: &[Entry] = &[
    usage("WeighingDevice", 0x01, CA),
    usage("ScaleDevice", 0x20, CL),
    usage("ScaleClass", 0x21, CL),
    usage("ScaleClassIMetric", 0x22, SEL),
    usage("ScaleClassIiMetric", 0x23, SEL),
    usage("ScaleClassIiiMetric", 0x24, SEL),
    usage("ScaleClassIiilMetric", 0x25, SEL),
    usage("ScaleClassIvMetric", 0x26, SEL),
    usage("ScaleClassIiiEnglish", 0x27, SEL),
    usage("ScaleClassIiilEnglish", 0x28, SEL),
    usage("ScaleClassIvEnglish", 0x29, SEL),
    usage("ScaleClassGeneric", 0x2A, SEL),
    usage("ScaleAttributeReport", 0x30, CL),
    usage("ScaleControlReport", 0x31, CL),
    usage("ScaleDataReport", 0x32, CL),
    usage("ScaleStatusReport", 0x33, CL),
    usage("ScaleWeightLimitReport", 0x34, CL),
    usage("ScaleStatisticsReport", 0x35, CL),
    usage("DataWeight", 0x40, DV),
    usage("DataScaling", 0x41, DV),
    usage("WeightUnit", 0x50, CL),
    usage("WeightUnitMilligram", 0x51, SEL),
    usage("WeightUnitGram", 0x52, SEL),
    usage("WeightUnitKilogram", 0x53, SEL),
    usage("WeightUnitCarats", 0x54, SEL),
    usage("WeightUnitTaels", 0x55, SEL),
    usage("WeightUnitGrains", 0x56, SEL),
    usage("WeightUnitPennyweights", 0x57, SEL),
    usage("WeightUnitMetricTon", 0x58, SEL),
    usage("WeightUnitAvoirTon", 0x59, SEL),
    usage("WeightUnitTroyOunce", 0x5A, SEL),
    usage("WeightUnitOunce", 0x5B, SEL),
    usage("WeightUnitPound", 0x5C, SEL),
    usage("CalibrationCount", 0x60, DV),
    usage("ReZeroCount", 0x61, DV),
    usage("ScaleStatus", 0x70, CL),
    usage("ScaleStatusFault", 0x71, SEL),
    usage("ScaleStatusStableAtCenterOfZero", 0x72, SEL),
    usage("ScaleStatusInMotion", 0x73, SEL),
    usage("ScaleStatusWeightStable", 0x74, SEL),
    usage("ScaleStatusUnderZero", 0x75, SEL),
    usage("ScaleStatusOverWeightLimit", 0x76, SEL),
    usage("ScaleStatusRequiresCalibration", 0x77, SEL),
    usage("ScaleStatusRequiresRezeroing", 0x78, SEL),
    usage("ZeroScale", 0x80, OOC),
    usage("EnforcedZeroReturn", 0x81, OOC),
];

/// Magnetic Stripe Reader page, HID Point of Sale Usage Tables 1.02 ch. 5.
pub(crate) const MAGNETIC_STRIPE_READER: &[Entry] = &[
    usage("MsrDeviceReadOnly", 0x01, CA),
    usage("Track1Length", 0x11, SF | DF | SEL),
    usage("Track2Length", 0x12, SF | DF | SEL),
    usage("Track3Length", 0x13, SF | DF | SEL),
    usage("TrackJisLength", 0x14, SF | DF | SEL),
    usage("TrackData", 0x20, SF | DF | SEL),
    usage("Track1Data", 0x21, SF | DF | SEL),
    usage("Track2Data", 0x22, SF | DF | SEL),
    usage("Track3Data", 0x23, SF | DF | SEL),
    usage("TrackJisData", 0x24, SF | DF | SEL),
];

/// Camera Control page, HID Usage Tables 1.2 ch. 25.
pub(crate) const CAMERA_CONTROL: &[Entry] = &[
    usage("CameraAutoFocus", 0x20, OSC),
    usage("CameraShutter", 0x21, OSC),
];

/// Arcade page, Open Arcade Architecture Device Data Format 1.100 ch. 2.
pub(crate) const ARCADE: &[Entry] = &[
    usage("GeneralPurposeIoCard", 0x01, CA),
    usage("CoinDoor", 0x02, CA),
    usage("WatchdogTimer", 0x03, CA),
    usage("GeneralPurposeAnalogInputState", 0x30, DV),
    usage("GeneralPurposeDigitalInputState", 0x31, DV),
    usage("GeneralPurposeOpticalInputState", 0x32, DV),
    usage("GeneralPurposeDigitalOutputState", 0x33, DV),
    usage("NumberOfCoinDoors", 0x34, DV),
    usage("CoinDrawerDropCount", 0x35, DV),
    usage("CoinDrawerDropStart", 0x36, OOC),
    usage("CoinDrawerDropService", 0x37, OOC),
    usage("CoinDrawerDropTilt", 0x38, OOC),
    usage("CoinDoorTest", 0x39, OOC),
    usage("CoinDoorLockout", 0x40, OOC),
    usage("WatchdogTimeout", 0x41, DV),
    usage("WatchdogAction", 0x42, NARY),
    usage("WatchdogReboot", 0x43, SEL),
    usage("WatchdogRestart", 0x44, SEL),
    usage("AlarmInput", 0x45, DV),
    usage("CoinDoorCounter", 0x46, OOC),
    usage("IoDirectionMapping", 0x47, DV),
    usage("SetIoDirection", 0x48, OOC),
    usage("ExtendedOpticalInputState", 0x49, DV),
    usage("PinPadInputState", 0x4A, DV),
    usage("PinPadStatus", 0x4B, DV),
    usage("PinPadOutput", 0x4C, OOC),
    usage("PinPadCommand", 0x4D, DV),
];

/// FIDO Alliance page, HID Usage Tables 1.2 ch. 27.
pub(crate) const FIDO_ALLIANCE: &[Entry] = &[
    usage("U2fAuthenticatorDevice", 0x01, CA),
    usage("InputReportData", 0x20, DV),
    usage("OutputReportData", 0x21, DV),
];
