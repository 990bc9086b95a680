use heapless::Vec;
use hbb_deck::{KeyChord, KeyReporter};
use usb_device::bus::{UsbBus, UsbBusAllocator};
use usb_device::device::{UsbDevice, UsbDeviceBuilder, UsbVidPid};
use usbd_hid::descriptor::{KeyboardReport, SerializedDescriptor};
use usbd_hid::hid_class::HIDClass;

/// Keys a boot keyboard report can carry at once.
const REPORT_KEYS: usize = 6;

/// USB boot keyboard. Reports every chord currently pressed.
pub struct HidKeyboard<'a, B: UsbBus> {
    device: UsbDevice<'a, B>,
    hid: HIDClass<'a, B>,
    held: Vec<KeyChord, REPORT_KEYS>,
}

impl<'a, B: UsbBus> HidKeyboard<'a, B> {
    pub fn new(bus: &'a UsbBusAllocator<B>) -> Self {
        let hid = HIDClass::new(bus, KeyboardReport::desc(), 10);
        let device = UsbDeviceBuilder::new(bus, UsbVidPid(0x16c0, 0x27db))
            .manufacturer("HBB")
            .product("HBB stream deck")
            .serial_number("0001")
            .build();

        Self {
            device,
            hid,
            held: Vec::new(),
        }
    }

    /// Services the bus; call at least once per poll interval.
    pub fn poll(&mut self) {
        self.device.poll(&mut [&mut self.hid]);
    }

    fn send(&mut self) {
        let mut report = KeyboardReport {
            modifier: 0,
            reserved: 0,
            leds: 0,
            keycodes: [0; REPORT_KEYS],
        };
        for (slot, chord) in report.keycodes.iter_mut().zip(&self.held) {
            report.modifier |= chord.modifiers;
            *slot = chord.keycode;
        }
        // fire-and-forget, a busy endpoint drops the report
        let _ = self.hid.push_input(&report);
    }
}

impl<B: UsbBus> KeyReporter for HidKeyboard<'_, B> {
    fn press(&mut self, chord: KeyChord) {
        if !self.held.contains(&chord) {
            // beyond six keys the report has no room; the extra key is dropped
            let _ = self.held.push(chord);
        }
        self.send();
    }

    fn release(&mut self, chord: KeyChord) {
        self.held.retain(|held| *held != chord);
        self.send();
    }
}
