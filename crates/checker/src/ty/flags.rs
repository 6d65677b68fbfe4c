bitflags::bitflags! {
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct TypeFlags: u16 {
        const ANY               = 1 << 0;
        const NOTHING           = 1 << 1;
        const INT               = 1 << 2;
        const LONG              = 1 << 3;
        const DOUBLE            = 1 << 4;
        const BOOLEAN           = 1 << 5;
        const STRING            = 1 << 6;
        const CHAR              = 1 << 7;
        const UNIT              = 1 << 8;
        const NULL              = 1 << 9;
        const ERROR             = 1 << 10;
        const LIT_SINGLETON     = 1 << 11;
        const PATH_SINGLETON    = 1 << 12;

        const SINGLETON = Self::LIT_SINGLETON.bits() | Self::PATH_SINGLETON.bits();
        const INTRINSIC = Self::ANY.bits()
            | Self::NOTHING.bits()
            | Self::INT.bits()
            | Self::LONG.bits()
            | Self::DOUBLE.bits()
            | Self::BOOLEAN.bits()
            | Self::STRING.bits()
            | Self::CHAR.bits()
            | Self::UNIT.bits()
            | Self::NULL.bits()
            | Self::ERROR.bits();
        const NUMERIC = Self::INT.bits() | Self::LONG.bits() | Self::DOUBLE.bits();
    }
}
