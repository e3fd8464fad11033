//! Captured adb output used across tests

pub const DEVICES_OUTPUT: &str = concat!(
    "List of devices attached\n",
    "emulator-5554\tdevice\n",
    "0123456789ABCDEF\toffline\n",
    "R58M41ABCDE\tunauthorized\n",
    "192.168.1.100:5555\tdevice\n",
    "\n",
);

/// `adb devices -l`: space-padded columns followed by attributes
pub const DEVICES_LONG_OUTPUT: &str = concat!(
    "List of devices attached\n",
    "emulator-5554          device product:sdk_gphone64_x86_64 model:Pixel_6 device:emu64x transport_id:1\n",
    "0123456789ABCDEF       offline transport_id:2\n",
    "192.168.1.100:5555     device product:oriole model:Pixel_6 device:oriole transport_id:3\n",
    "\n",
);

pub const NO_DEVICES_OUTPUT: &str = "List of devices attached\n\n";

pub const PACKAGES_OUTPUT: &str = concat!(
    "package:com.android.settings\n",
    "package:com.example.app\n",
    "package:com.google.android.gms\n",
);

pub const PS_OUTPUT: &str = concat!(
    "USER           PID  PPID     VSZ    RSS WCHAN            ADDR S NAME\r\n",
    "root             1     0 10782796 11264 0                   0 S init\r\n",
    "system         612     1 14331136 98304 0                   0 S zygote64\r\n",
    "u0_a123       4321   612 14976344 98304 0                   0 S com.example.app\r\n",
    "system         999   612 15520492 250000 0                  0 S system_server\r\n",
);

pub const DUMPSYS_PACKAGE_OUTPUT: &str = concat!(
    "Activity Resolver Table:\n",
    "  Non-Data Actions:\n",
    "      android.intent.action.MAIN:\n",
    "        4b2a1f0 com.example.app/.MainActivity filter 8e3c7d1\n",
    "\n",
    "Packages:\n",
    "  Package [com.example.app] (4b2a1f0):\n",
    "    userId=10123\n",
    "    versionName=1.2.3\n",
    "    User 0: ceDataInode=41234 installed=true hidden=false\n",
    "\n",
    "Dexopt state:\n",
    "  [com.example.app]\n",
    "    path: /data/app/~~Xq1==/com.example.app-Zz9==/base.apk\n",
    "      arm64: [status=speed-profile] [reason=install-dm]\n",
);

pub const SERIALNO_UNKNOWN: &str = "unknown\n";

pub const BUGREPORT_OUTPUT: &str = concat!(
    "========================================================\n",
    "== dumpstate: 2024-01-02 10:11:12\n",
    "========================================================\n",
);
