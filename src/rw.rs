use embedded_hal_async::{delay::DelayNs, i2c::*};

use crate::{Error, Lis331, defs::Reg};

impl<I, D, E> Lis331<I, D>
where
  I: I2c<SevenBitAddress, Error = E>,
  D: DelayNs,
{
  pub(crate) async fn read<T: TryFrom<[u8; 1]>>(&mut self, reg: Reg) -> Result<T, Error<E>> {
    let b = self.read_u8(reg).await?;
    TryFrom::try_from([b]).map_err(|_| Error::Data)
  }

  /// Single register read. The device only auto-increments when the
  /// sub-address MSB is set, which is never done here.
  pub(crate) async fn read_u8(&mut self, reg: Reg) -> Result<u8, Error<E>> {
    let mut b = [0u8; 1];
    self.i2c.write_read(self.address, &[reg.into()], &mut b).await.map_err(Error::I2c)?;
    Ok(b[0])
  }

  pub(crate) async fn write<T: TryInto<[u8; 1]>>(&mut self, reg: Reg, v: T) -> Result<(), Error<E>> {
    let [b] = v.try_into().map_err(|_| Error::Data)?;
    self.write_u8(reg, b).await
  }

  pub(crate) async fn write_u8(&mut self, reg: Reg, value: u8) -> Result<(), Error<E>> {
    self.i2c.write(self.address, &[reg.into(), value]).await.map_err(Error::I2c)
  }
}
