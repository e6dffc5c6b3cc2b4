use libpn532::constants::{SPI_DATA_READ, SPI_DATA_WRITE, SPI_STATUS_READ};
use libpn532::transport::{MockTransport, Transaction, Transport};

#[test]
fn scripted_status_sequence() {
    let mut m = MockTransport::new();
    m.push_status(0x00);
    m.push_status(0x01);
    let mut tx = Transaction::begin(&mut m).unwrap();
    assert_eq!(tx.transfer_byte(SPI_STATUS_READ).unwrap(), 0x00);
    assert_eq!(tx.transfer_byte(SPI_STATUS_READ).unwrap(), 0x01);
}

#[test]
fn write_and_read_through_boxed_transport() {
    let handle = MockTransport::new();
    let mut boxed: Box<dyn Transport> = Box::new(handle.clone());
    let mut script = handle.clone();
    script.push_read(vec![0xD5, 0x03]);

    {
        let mut tx = Transaction::begin(&mut *boxed).unwrap();
        tx.transfer_byte(SPI_DATA_WRITE).unwrap();
        tx.write(&[0xD4, 0x02]).unwrap();
    }
    let mut buf = [0u8; 2];
    {
        let mut tx = Transaction::begin(&mut *boxed).unwrap();
        tx.transfer_byte(SPI_DATA_READ).unwrap();
        tx.transfer(&mut buf).unwrap();
    }

    assert_eq!(buf, [0xD5, 0x03]);
    assert_eq!(handle.written(), vec![vec![0xD4, 0x02]]);
    assert_eq!(handle.transactions(), 2);
    assert_eq!(handle.pending_reads(), 0);
}
