//! Static encoding tables mapping source names to HID byte codes.
//!
//! Every table is a flat `&[Entry]` slice; hierarchy comes from the
//! [`Args`] child reference on each entry. An entry name ending in `#`
//! together with the following entry of the same name declares a numbered
//! range resolved from the token's decimal suffix (see
//! [`crate::resolve`]).

pub(crate) mod pages;

/// Usage types, HID 1.11 ch. 3.4.
///
/// Kept on every usage entry for future compatibility checks; the
/// compiler does not act on them today.
pub(crate) mod usage_type {
    pub(crate) const NONE: u32 = 0;
    /* controls, ch. 3.4.1 */
    pub(crate) const LC: u32 = 1 << 0; // linear control
    pub(crate) const OOC: u32 = 1 << 1; // on/off control
    pub(crate) const MC: u32 = 1 << 2; // momentary control
    pub(crate) const OSC: u32 = 1 << 3; // one shot control
    pub(crate) const RTC: u32 = 1 << 4; // re-trigger control
    /* data, ch. 3.4.2 */
    pub(crate) const SEL: u32 = 1 << 5; // selector
    pub(crate) const SV: u32 = 1 << 6; // static value
    pub(crate) const SF: u32 = 1 << 7; // static flag
    pub(crate) const DV: u32 = 1 << 8; // dynamic value
    pub(crate) const DF: u32 = 1 << 9; // dynamic flag
    /* collections, ch. 3.4.3 */
    pub(crate) const NARY: u32 = 1 << 10; // named array
    pub(crate) const CA: u32 = 1 << 11; // application collection
    pub(crate) const CL: u32 = 1 << 12; // logical collection
    pub(crate) const CP: u32 = 1 << 13; // physical collection
    pub(crate) const US: u32 = 1 << 14; // usage switch
    pub(crate) const UM: u32 = 1 << 15; // usage modifier
    /* others */
    pub(crate) const BB: u32 = 1 << 16; // buffered bytes
}

/// Argument shape of an entry, replacing the original sentinel-pointer
/// scheme with a tagged reference.
#[derive(Clone, Copy, Debug)]
pub(crate) enum Args {
    /// No argument list is accepted at all.
    None,
    /// One unsigned integer literal or parameter.
    Unsigned,
    /// One signed integer literal or parameter.
    Signed,
    /// One usage, resolved through the active usage page or numeric.
    Usage,
    /// Marks a flag entry that clears its bit instead of setting it.
    Clear,
    /// Closes the enclosing collection; no named arguments exist.
    EndCollection,
    /// Collection kind names.
    Collection(&'static [Entry]),
    /// Input/Output/Feature flag names; commas may chain several.
    Flags(&'static [Entry]),
    /// Unit system names, each opening a nested unit description.
    UnitSystems(&'static [Entry]),
    /// Unit names within one system.
    Units(&'static [Entry]),
    /// Unit exponent codes.
    Exponents(&'static [Entry]),
    /// Delimiter(Open)/Delimiter(Close).
    Delimiters(&'static [Entry]),
    /// Usage page names; named pages point at their usage table.
    UsagePages(&'static [Entry]),
    /// Usages of a single page.
    Usages(&'static [Entry]),
}

impl Args {
    /// The named entries behind this reference, if any.
    pub(crate) fn entries(self) -> Option<&'static [Entry]> {
        match self {
            Args::Collection(e)
            | Args::Flags(e)
            | Args::UnitSystems(e)
            | Args::Units(e)
            | Args::Exponents(e)
            | Args::Delimiters(e)
            | Args::UsagePages(e)
            | Args::Usages(e) => Some(e),
            _ => None,
        }
    }

    /// True when an item with this argument shape must carry an argument
    /// list with at least one resolvable argument.
    pub(crate) fn requires_argument(self) -> bool {
        matches!(self, Args::Usage) || self.entries().is_some()
    }
}

/// One name to value encoding.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Entry {
    pub(crate) name: &'static str,
    pub(crate) value: u32,
    pub(crate) types: u32,
    pub(crate) args: Args,
}

/// Top-level item entry.
pub(crate) const fn item(name: &'static str, value: u32, args: Args) -> Entry {
    Entry {
        name,
        value,
        types: usage_type::NONE,
        args,
    }
}

/// Usage entry with its usage type mask.
pub(crate) const fn usage(name: &'static str, value: u32, types: u32) -> Entry {
    Entry {
        name,
        value,
        types,
        args: Args::None,
    }
}

/// Flag argument that sets its bit.
const fn set(name: &'static str, value: u32) -> Entry {
    item(name, value, Args::None)
}

/// Flag argument that clears its bit, forming the default half of a
/// positive/negative pair.
const fn clear(name: &'static str, value: u32) -> Entry {
    item(name, value, Args::Clear)
}

/// Collection kinds, HID 1.11 ch. 6.2.2.6.
const COLLECTION_KINDS: &[Entry] = &[
    set("Physical", 0x00),
    set("Application", 0x01),
    set("Logical", 0x02),
    set("Report", 0x03),
    set("NamedArray", 0x04),
    set("UsageSwitch", 0x05),
    set("UsageModifier", 0x06),
];

/// Input item flags, HID 1.11 ch. 6.2.2.5.
const INPUT_FLAGS: &[Entry] = &[
    clear("Data", 0x001),
    set("Cnst", 0x001),
    clear("Ary", 0x002),
    set("Var", 0x002),
    clear("Abs", 0x004),
    set("Rel", 0x004),
    clear("NWarp", 0x008),
    set("Warp", 0x008),
    clear("Lin", 0x010),
    set("NLin", 0x010),
    clear("Prf", 0x020),
    set("NPrf", 0x020),
    clear("NNull", 0x040),
    set("Null", 0x040),
    clear("Bit", 0x100),
    set("Buf", 0x100),
];

/// Output/Feature item flags, HID 1.11 ch. 6.2.2.5.
const OUTPUT_FEATURE_FLAGS: &[Entry] = &[
    clear("Data", 0x001),
    set("Cnst", 0x001),
    clear("Ary", 0x002),
    set("Var", 0x002),
    clear("Abs", 0x004),
    set("Rel", 0x004),
    clear("NWarp", 0x008),
    set("Warp", 0x008),
    clear("Lin", 0x010),
    set("NLin", 0x010),
    clear("Prf", 0x020),
    set("NPrf", 0x020),
    clear("NNull", 0x040),
    set("Null", 0x040),
    clear("NVol", 0x080),
    set("Vol", 0x080),
    clear("Bit", 0x100),
    set("Buf", 0x100),
];

/// Unit exponent codes, HID 1.11 ch. 6.2.2.7.
const UNIT_EXPONENTS: &[Entry] = &[
    set("0", 0x0),
    set("1", 0x1),
    set("2", 0x2),
    set("3", 0x3),
    set("4", 0x4),
    set("5", 0x5),
    set("6", 0x6),
    set("7", 0x7),
    set("-8", 0x8),
    set("-7", 0x9),
    set("-6", 0xA),
    set("-5", 0xB),
    set("-4", 0xC),
    set("-3", 0xD),
    set("-2", 0xE),
    set("-1", 0xF),
];

/// Unit dimensions, HID 1.11 ch. 6.2.2.7. The value selects the nibble of
/// the packed unit word.
const UNITS: &[Entry] = &[
    item("Length", 1, Args::Exponents(UNIT_EXPONENTS)),
    item("Mass", 2, Args::Exponents(UNIT_EXPONENTS)),
    item("Time", 3, Args::Exponents(UNIT_EXPONENTS)),
    item("Temp", 4, Args::Exponents(UNIT_EXPONENTS)),
    item("Current", 5, Args::Exponents(UNIT_EXPONENTS)),
    item("Luminous", 6, Args::Exponents(UNIT_EXPONENTS)),
];

/// Unit systems, HID 1.11 ch. 6.2.2.7. The dimension names are
/// generalized; their concrete units per system:
///
/// |        | Length     | Mass | Time    | Temp       | Current | Luminous |
/// |--------|------------|------|---------|------------|---------|----------|
/// | SiLin  | Centimeter | Gram | Seconds | Kelvin     | Ampere  | Candela  |
/// | SiRot  | Radians    | Gram | Seconds | Kelvin     | Ampere  | Candela  |
/// | EngLin | Inch       | Slug | Seconds | Fahrenheit | Ampere  | Candela  |
/// | EngRot | Degrees    | Slug | Seconds | Fahrenheit | Ampere  | Candela  |
const UNIT_SYSTEMS: &[Entry] = &[
    item("None", 0x00, Args::Units(UNITS)),
    item("SiLin", 0x01, Args::Units(UNITS)),
    item("SiRot", 0x02, Args::Units(UNITS)),
    item("EngLin", 0x03, Args::Units(UNITS)),
    item("EngRot", 0x04, Args::Units(UNITS)),
];

/// Delimiter arguments, HID 1.11 ch. 6.2.2.8.
const DELIMITERS: &[Entry] = &[set("Close", 0x00), set("Open", 0x01)];

/// Usage page names, HID Usage Tables 1.2 ch. 3. Pages without named
/// usages carry no usage table and only accept numeric `Usage` arguments.
pub(crate) const USAGE_PAGES: &[Entry] = &[
    item("GenericDesktop", 0x01, Args::Usages(pages::GENERIC_DESKTOP)),
    item("SimulationControls", 0x02, Args::Usages(pages::SIMULATION_CONTROLS)),
    item("VrControls", 0x03, Args::Usages(pages::VR_CONTROLS)),
    item("SportControls", 0x04, Args::Usages(pages::SPORT_CONTROLS)),
    item("GameControls", 0x05, Args::Usages(pages::GAME_CONTROLS)),
    item("GenericDeviceControls", 0x06, Args::Usages(pages::GENERIC_DEVICE_CONTROLS)),
    item("Keyboard", 0x07, Args::Usages(pages::KEYBOARD)),
    item("Led", 0x08, Args::Usages(pages::LED)),
    item("Button", 0x09, Args::Usages(pages::BUTTON)),
    item("Ordinal", 0x0A, Args::Usages(pages::ORDINAL)),
    item("TelephonyDevice", 0x0B, Args::Usages(pages::TELEPHONY_DEVICE)),
    item("Consumer", 0x0C, Args::Usages(pages::CONSUMER)),
    item("Digitizers", 0x0D, Args::Usages(pages::DIGITIZERS)),
    item("Haptics", 0x0E, Args::Usages(pages::HAPTICS)),
    item("Pid", 0x0F, Args::Usages(pages::PID)),
    item("Unicode", 0x10, Args::Usages(pages::UNICODE)),
    item("EyeAndHeadTrackers", 0x12, Args::Usages(pages::EYE_AND_HEAD_TRACKERS)),
    item("AuxiliaryDisplay", 0x14, Args::Usages(pages::AUXILIARY_DISPLAY)),
    item("Sensors", 0x20, Args::Usages(pages::SENSORS)),
    item("MediacalInstrument", 0x40, Args::Usages(pages::MEDICAL_INSTRUMENT)),
    item("BrailleDisplay", 0x41, Args::Usages(pages::BRAILLE_DISPLAY)),
    item("LightingAndIllumination", 0x59, Args::Usages(pages::LIGHTING)),
    item("Monitor", 0x80, Args::Usages(pages::MONITOR)),
    // Monitor Control Class Specification 1.0 ch. 6
    item("MonitorEnumeratedValues", 0x81, Args::Usages(pages::MONITOR_ENUMERATED)),
    item("VesaVirtualControls", 0x82, Args::Usages(pages::VESA_VIRTUAL_CONTROLS)),
    item("Power", 0x84, Args::Usages(pages::POWER_DEVICE)),
    item("BarCodeScanner", 0x8C, Args::Usages(pages::BARCODE_SCANNER)),
    item("WeighingDevices", 0x8D, Args::Usages(pages::WEIGHING_DEVICES)),
    item("MagneticStripeReaderDevices", 0x8E, Args::Usages(pages::MAGNETIC_STRIPE_READER)),
    item("CameraControl", 0x90, Args::Usages(pages::CAMERA_CONTROL)),
    item("Arcade", 0x91, Args::Usages(pages::ARCADE)),
    item("GamingDevice", 0x92, Args::None),
    item("FidoAlliance", 0xF1D0, Args::Usages(pages::FIDO_ALLIANCE)),
];

/// Top-level items. The value is the item prefix with a zero size code;
/// the emitted prefix is `value | size_code(data_len)`.
pub(crate) const ITEMS: &[Entry] = &[
    /* main items, HID 1.11 ch. 6.2.2.4 */
    item("Input", 0x80, Args::Flags(INPUT_FLAGS)),
    item("Output", 0x90, Args::Flags(OUTPUT_FEATURE_FLAGS)),
    item("Feature", 0xB0, Args::Flags(OUTPUT_FEATURE_FLAGS)),
    item("Collection", 0xA0, Args::Collection(COLLECTION_KINDS)),
    item("EndCollection", 0xC0, Args::EndCollection),
    /* global items, HID 1.11 ch. 6.2.2.7 */
    item("UsagePage", 0x04, Args::UsagePages(USAGE_PAGES)),
    item("LogicalMinimum", 0x14, Args::Signed),
    item("LogicalMaximum", 0x24, Args::Signed),
    item("PhysicalMinimum", 0x34, Args::Signed),
    item("PhysicalMaximum", 0x44, Args::Signed),
    item("UnitExponent", 0x54, Args::Exponents(UNIT_EXPONENTS)),
    item("Unit", 0x64, Args::UnitSystems(UNIT_SYSTEMS)),
    item("ReportSize", 0x74, Args::Unsigned),
    item("ReportId", 0x84, Args::Unsigned),
    item("ReportCount", 0x94, Args::Unsigned),
    item("Push", 0xA4, Args::None),
    item("Pop", 0xB4, Args::None),
    /* local items, HID 1.11 ch. 6.2.2.8; all take unsigned values */
    item("Usage", 0x08, Args::Usage),
    item("UsageMinimum", 0x18, Args::Usage),
    item("UsageMaximum", 0x28, Args::Usage),
    item("DesignatorIndex", 0x38, Args::Unsigned),
    item("DesignatorMinimum", 0x48, Args::Unsigned),
    item("DesignatorMaximum", 0x58, Args::Unsigned),
    item("StringIndex", 0x78, Args::Unsigned),
    item("StringMinimum", 0x88, Args::Unsigned),
    item("StringMaximum", 0x98, Args::Unsigned),
    item("Delimiter", 0xA8, Args::Delimiters(DELIMITERS)),
];

#[cfg(test)]
mod test {
    use super::*;

    fn walk(table: &'static [Entry], seen: &mut usize) {
        for entry in table {
            *seen += 1;
            assert!(!entry.name.is_empty());
            assert!(entry.name.is_ascii(), "name: {}", entry.name);
            if let Some(idx) = entry.name.find('#') {
                // numbered ranges come as a pair with `#` last
                assert_eq!(idx + 1, entry.name.len(), "name: {}", entry.name);
            }
            if let Some(children) = entry.args.entries() {
                walk(children, seen);
            }
        }
    }

    #[test]
    fn tables_are_well_formed() {
        let mut seen = 0;
        walk(ITEMS, &mut seen);
        assert!(seen > 2000, "entries reachable from ITEMS: {seen}");
    }

    #[test]
    fn indexed_entries_pair_up() {
        fn check(table: &'static [Entry]) {
            for (i, entry) in table.iter().enumerate() {
                if entry.name.ends_with('#') {
                    let partner = if i > 0 && table[i - 1].name == entry.name {
                        &table[i - 1]
                    } else {
                        &table[i + 1]
                    };
                    assert_eq!(partner.name, entry.name);
                }
            }
            for entry in table {
                if let Some(children) = entry.args.entries() {
                    check(children);
                }
            }
        }
        check(ITEMS);
    }

    #[test]
    fn item_prefixes_leave_the_size_bits_clear() {
        for entry in ITEMS {
            assert_eq!(entry.value & 0x03, 0, "item: {}", entry.name);
        }
    }
}
