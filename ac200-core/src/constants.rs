//! Register map of the AC200 companion chip.
//!
//! Pure data: 16-bit logical offsets, high byte = page, low byte = in-page
//! offset. Grouped by functional block.

/// Interface registers, reachable from any page without a page switch.
/// These are low-byte offsets reserved in every page.
pub mod twi {
    /// Trigger to switch the bus pads over to RSB mode
    pub const CHANGE_TO_RSB: u8 = 0x3E;
    /// Bus pad delay tuning
    pub const PAD_DELAY: u8 = 0xC4;
    /// High-address-byte latch (page select)
    pub const REG_ADDR_H: u8 = 0xFE;
}

/// System control block (page 0x00)
pub mod sys {
    pub const VERSION: u16 = 0x0000;
    pub const CONTROL: u16 = 0x0002;
    pub const IRQ_ENABLE: u16 = 0x0004;
    pub const IRQ_STATUS: u16 = 0x0006;
    pub const CLK_CTL: u16 = 0x0008;
    pub const DLDO_OSC_CTL: u16 = 0x000A;
    pub const PLL_CTL0: u16 = 0x000C;
    pub const PLL_CTL1: u16 = 0x000E;
    pub const AUDIO_CTL0: u16 = 0x0010;
    pub const AUDIO_CTL1: u16 = 0x0012;
    pub const EPHY_CTL0: u16 = 0x0014;
    pub const EPHY_CTL1: u16 = 0x0016;
    pub const TVE_CTL0: u16 = 0x0018;
    pub const TVE_CTL1: u16 = 0x001A;
}

/// Audio codec block (pages 0x20-0x25, 0x30-0x31)
pub mod audio {
    pub const SYS_CLK_CTL: u16 = 0x2000;
    pub const SYS_MOD_RST: u16 = 0x2002;
    pub const SYS_SAMP_CTL: u16 = 0x2004;

    pub const I2S_CTL: u16 = 0x2100;
    pub const I2S_CLK: u16 = 0x2102;
    pub const I2S_FMT0: u16 = 0x2104;
    pub const I2S_FMT1: u16 = 0x2108;
    pub const I2S_MIX_SRC: u16 = 0x2114;
    pub const I2S_MIX_GAIN: u16 = 0x2116;
    pub const I2S_DACDAT_DVC: u16 = 0x2118;
    pub const I2S_ADCDAT_DVC: u16 = 0x211A;

    pub const DAC_DPC: u16 = 0x2200;
    pub const DAC_MIX_SRC: u16 = 0x2202;
    pub const DAC_MIX_GAIN: u16 = 0x2204;
    pub const DACA_OMIXER_CTRL: u16 = 0x2220;
    pub const OMIXER_SR: u16 = 0x2222;
    pub const LINEOUT_CTRL: u16 = 0x2224;

    pub const ADC_DPC: u16 = 0x2300;
    pub const MBIAS_CTRL: u16 = 0x2310;
    pub const ADC_MIC_CTRL: u16 = 0x2320;
    pub const ADCMIXER_SR: u16 = 0x2322;
    pub const ANALOG_TUNING0: u16 = 0x232A;
    pub const ANALOG_TUNING1: u16 = 0x232C;

    pub const AGC_SEL: u16 = 0x2480;

    pub const ADC_DAPLCTRL: u16 = 0x2500;
    pub const ADC_DAPRCTRL: u16 = 0x2502;
    pub const ADC_DAPLSTA: u16 = 0x2504;
    pub const ADC_DAPRSTA: u16 = 0x2506;
    pub const ADC_DAPLTL: u16 = 0x2508;
    pub const ADC_DAPRTL: u16 = 0x250A;
    pub const ADC_DAPLHAC: u16 = 0x250C;
    pub const ADC_DAPLLAC: u16 = 0x250E;
    pub const ADC_DAPRHAC: u16 = 0x2510;
    pub const ADC_DAPRLAC: u16 = 0x2512;
    pub const ADC_DAPLDT: u16 = 0x2514;
    pub const ADC_DAPLAT: u16 = 0x2516;
    pub const ADC_DAPRDT: u16 = 0x2518;
    pub const ADC_DAPRAT: u16 = 0x251A;
    pub const ADC_DAPNTH: u16 = 0x251C;
    pub const ADC_DAPLHNAC: u16 = 0x251E;
    pub const ADC_DAPLLNAC: u16 = 0x2520;
    pub const ADC_DAPRHNAC: u16 = 0x2522;
    pub const ADC_DAPRLNAC: u16 = 0x2524;
    pub const DAPHHPFC: u16 = 0x2526;
    pub const DAPLHPFC: u16 = 0x2528;
    pub const DAPOPT: u16 = 0x252A;

    pub const DAC_DAPCTRL: u16 = 0x3000;
    pub const DRC_HHPFC: u16 = 0x3002;
    pub const DRC_LHPFC: u16 = 0x3004;
    pub const DRC_CTRL: u16 = 0x3006;
    pub const DRC_LPFHAT: u16 = 0x3008;
    pub const DRC_LPFLAT: u16 = 0x300A;
    pub const DRC_RPFHAT: u16 = 0x300C;
    pub const DRC_RPFLAT: u16 = 0x300E;
    pub const DRC_LPFHRT: u16 = 0x3010;
    pub const DRC_LPFLRT: u16 = 0x3012;
    pub const DRC_RPFHRT: u16 = 0x3014;
    pub const DRC_RPFLRT: u16 = 0x3016;
    pub const DRC_LRMSHAT: u16 = 0x3018;
    pub const DRC_LRMSLAT: u16 = 0x301A;
    pub const DRC_RRMSHAT: u16 = 0x301C;
    pub const DRC_RRMSLAT: u16 = 0x301E;
    pub const DRC_HCT: u16 = 0x3020;
    pub const DRC_LCT: u16 = 0x3022;
    pub const DRC_HKC: u16 = 0x3024;
    pub const DRC_LKC: u16 = 0x3026;
    pub const DRC_HOPC: u16 = 0x3028;
    pub const DRC_LOPC: u16 = 0x302A;
    pub const DRC_HLT: u16 = 0x302C;
    pub const DRC_LLT: u16 = 0x302E;
    pub const DRC_HKI: u16 = 0x3030;
    pub const DRC_LKI: u16 = 0x3032;
    pub const DRC_HOPL: u16 = 0x3034;
    pub const DRC_LOPL: u16 = 0x3036;
    pub const DRC_HET: u16 = 0x3038;
    pub const DRC_LET: u16 = 0x303A;
    pub const DRC_HKE: u16 = 0x303C;
    pub const DRC_LKE: u16 = 0x303E;
    pub const DRC_HOPE: u16 = 0x3040;
    pub const DRC_LOPE: u16 = 0x3042;
    pub const DRC_HKN: u16 = 0x3044;
    pub const DRC_LKN: u16 = 0x3046;
    pub const DRC_SFHAT: u16 = 0x3048;
    pub const DRC_SFLAT: u16 = 0x304A;
    pub const DRC_SFHRT: u16 = 0x304C;
    pub const DRC_SFLRT: u16 = 0x304E;
    pub const DRC_MXGHS: u16 = 0x3050;
    pub const DRC_MXGLS: u16 = 0x3052;
    pub const DRC_MNGHS: u16 = 0x3054;
    pub const DRC_MNGLS: u16 = 0x3056;
    pub const DRC_EPSHC: u16 = 0x3058;
    pub const DRC_EPSLC: u16 = 0x305A;
    pub const DRC_HPFHGAIN: u16 = 0x305E;
    pub const DRC_HPFLGAIN: u16 = 0x3060;
    pub const DRC_BISTCR: u16 = 0x3100;
    pub const DRC_BISTST: u16 = 0x3102;
}

/// TV encoder block (pages 0x40, 0x50)
pub mod tve {
    pub const CTL0: u16 = 0x4000;
    pub const CTL1: u16 = 0x4002;
    pub const MOD0: u16 = 0x4004;
    pub const MOD1: u16 = 0x4006;
    pub const DAC_CFG0: u16 = 0x4008;
    pub const DAC_CFG1: u16 = 0x400A;
    pub const YC_DELAY: u16 = 0x400C;
    pub const YC_FILTER: u16 = 0x400E;
    pub const BURST_FRQ0: u16 = 0x4010;
    pub const BURST_FRQ1: u16 = 0x4012;
    pub const FRONT_PORCH: u16 = 0x4014;
    pub const BACK_PORCH: u16 = 0x4016;
    pub const TOTAL_LINE: u16 = 0x401C;
    pub const FIRST_ACTIVE: u16 = 0x401E;
    pub const BLACK_LEVEL: u16 = 0x4020;
    pub const BLANK_LEVEL: u16 = 0x4022;
    pub const PLUG_EN: u16 = 0x4030;
    pub const PLUG_IRQ_EN: u16 = 0x4032;
    pub const PLUG_IRQ_STA: u16 = 0x4034;
    pub const PLUG_STA: u16 = 0x4038;
    pub const PLUG_DEBOUNCE: u16 = 0x4040;
    pub const DAC_TEST: u16 = 0x4042;
    pub const PLUG_PULSE_LEVEL: u16 = 0x40F4;
    pub const PLUG_PULSE_START: u16 = 0x40F8;
    pub const PLUG_PULSE_PERIOD: u16 = 0x40FA;

    pub const IF_CTL: u16 = 0x5000;
    pub const IF_TIM0: u16 = 0x5008;
    pub const IF_TIM1: u16 = 0x500A;
    pub const IF_TIM2: u16 = 0x500C;
    pub const IF_TIM3: u16 = 0x500E;
    pub const IF_SYNC0: u16 = 0x5010;
    pub const IF_SYNC1: u16 = 0x5012;
    pub const IF_SYNC2: u16 = 0x5014;
    pub const IF_TIM4: u16 = 0x5016;
    pub const IF_STATUS: u16 = 0x5018;
}

/// Ethernet PHY block (page 0x60)
pub mod ephy {
    pub const CTL: u16 = 0x6000;
    pub const BIST: u16 = 0x6002;
}

/// eFuse block. Internal layout is undocumented; treated as opaque and
/// never written by this crate.
pub mod efuse {
    pub const START: u16 = 0x8000;
    pub const END: u16 = 0x9FFF;
}

/// RTC and general-purpose data block (pages 0xA0, 0xA1)
pub mod rtc {
    pub const LOSC_CTRL0: u16 = 0xA000;
    pub const LOSC_CTRL1: u16 = 0xA002;
    pub const LOSC_AUTO_SWT_STA: u16 = 0xA004;
    pub const INTOSC_CLK_PRESCAL: u16 = 0xA008;
    pub const YY_MM_DD0: u16 = 0xA010;
    pub const YY_MM_DD1: u16 = 0xA012;
    pub const HH_MM_SS0: u16 = 0xA014;
    pub const HH_MM_SS1: u16 = 0xA016;
    pub const ALARM0_CUR_VLU0: u16 = 0xA024;
    pub const ALARM0_CUR_VLU1: u16 = 0xA026;
    pub const ALARM0_ENABLE: u16 = 0xA028;
    pub const ALARM0_IRQ_EN: u16 = 0xA02C;
    pub const ALARM0_IRQ_STA: u16 = 0xA030;
    pub const ALARM1_WK_HH_MM_SS0: u16 = 0xA040;
    pub const ALARM1_WK_HH_MM_SS1: u16 = 0xA042;
    pub const ALARM1_ENABLE: u16 = 0xA044;
    pub const ALARM1_IRQ_EN: u16 = 0xA048;
    pub const ALARM1_IRQ_STA: u16 = 0xA04C;
    pub const ALARM_CONFIG: u16 = 0xA050;
    pub const LOSC_OUT_GATING: u16 = 0xA060;

    /// First general-purpose data slot; slots are 16-bit, linearly indexed.
    pub const GP_DATA: u16 = 0xA100;
    /// Slot count, bounded by RTC_DEB at 0xA170.
    pub const GP_DATA_SLOTS: u16 = 56;

    /// Offset of general-purpose data slot `slot`.
    pub const fn gp_data(slot: u16) -> u16 {
        GP_DATA + slot * 2
    }

    pub const DEB: u16 = 0xA170;
    pub const GPL_HOLD_OUTPUT: u16 = 0xA180;
    pub const VDD_RTC: u16 = 0xA190;
    pub const IC_CHARA0: u16 = 0xA1F0;
    pub const IC_CHARA1: u16 = 0xA1F2;
}
